pub const SECTION_STYLES: &str = r#"
/* Page Sections */

main section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-4);
  min-height: 70vh;
}

/* Hero */
.hero {
  display: flex;
  align-items: center;
  min-height: calc(100vh - var(--header-height));
}

.hero-content {
  max-width: 640px;
}

.portfolio-text {
  font-size: 3rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.subtitle-text {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

/* About */
.about-title,
.projects-title {
  font-size: 2rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-6);
}

.about-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
  max-width: 640px;
}

.about-text strong {
  color: var(--text-primary);
}

.skillset-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
  margin: var(--space-8) 0 var(--space-4);
}

.skill-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.skill-category {
  color: var(--text-secondary);
}

.skill-category strong {
  color: var(--text-primary);
}

/* Slideshow */
.slideshow {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.slides {
  position: relative;
  flex: 1;
  aspect-ratio: 16 / 9;
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.slide {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.slide.active {
  opacity: 1;
}

.slideshow-arrow {
  border: none;
  background: none;
  color: var(--text-secondary);
  font-size: 2rem;
  cursor: pointer;
  padding: var(--space-2);
}

.slideshow-arrow:hover {
  color: var(--text-primary);
}

.slideshow-indicators {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.indicator {
  width: 10px;
  height: 10px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--neutral-300);
  cursor: pointer;
  padding: 0;
}

.indicator.active {
  background-color: var(--primary);
}

/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
  padding: var(--space-8) var(--space-4);
  text-align: center;
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.social-icon {
  width: 28px;
  height: 28px;
}

.footer-copyright {
  color: var(--text-secondary);
  font-size: 0.875rem;
}
"#;
