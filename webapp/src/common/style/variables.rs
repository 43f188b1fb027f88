pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #7C5CFC;          /* Primary violet */
  --primary-light: #9B82FD;    /* Lighter violet for hover states */
  --primary-dark: #5B3DF5;     /* Darker violet for active states */
  --accent: #F59E0B;           /* Amber accent for highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 60px;
  --content-width: 960px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark mode overrides, driven by the body class the theme controller sets */
body.dark-mode {
  --background: #0F1115;
  --surface: var(--neutral-900);
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --border: var(--neutral-700);
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5), 0 2px 4px -1px rgba(0, 0, 0, 0.4);
}"#;
