pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Header and navigation */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--content-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.nav-links {
  display: flex;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--neutral-100);
  text-decoration: none;
}

body.dark-mode .nav-link:hover {
  background-color: var(--neutral-800);
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(124, 92, 252, 0.12);
}

.nav-controls {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

/* Language toggle */
.language-toggle {
  display: flex;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  overflow: hidden;
}

.lang-button {
  border: none;
  background: none;
  color: var(--text-secondary);
  font-size: 0.8rem;
  font-weight: 600;
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
}

.lang-button.active {
  background-color: var(--primary);
  color: var(--text-inverse);
}

/* Theme toggle */
.theme-toggle {
  border: none;
  background: none;
  padding: var(--space-1);
  border-radius: var(--radius-full);
  cursor: pointer;
  display: flex;
  align-items: center;
}

.theme-icon {
  width: 24px;
  height: 24px;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}
"#;
