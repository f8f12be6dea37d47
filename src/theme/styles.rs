//! Global CSS for the portfolio.
//!
//! Both palettes live here as class-scoped custom properties; the app root
//! wears `.theme-light` or `.theme-dark` and everything below inherits.

pub const GLOBAL_STYLES: &str = r#"
/* === Palettes === */
.theme-light {
  --bg: #ffffff;
  --bg-subtle: #f9fafb;
  --text: #1f2937;
  --text-muted: #6b7280;
  --border: #e5e7eb;
  --accent: #3b82f6;
  --accent-strong: #2563eb;
  --dock-bg: rgba(255, 255, 255, 0.6);
  --dock-border: #e2e8f0;
  --dock-hover: rgba(100, 116, 139, 0.15);
  --avatar-ring: #d1d5db;
}

.theme-dark {
  --bg: #111827;
  --bg-subtle: #1f2937;
  --text: #d1d5db;
  --text-muted: #9ca3af;
  --border: #374151;
  --accent: #60a5fa;
  --accent-strong: #93c5fd;
  --dock-bg: rgba(0, 0, 0, 0.35);
  --dock-border: #1e293b;
  --dock-hover: rgba(148, 163, 184, 0.15);
  --avatar-ring: #374151;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
}

.theme-light, .theme-dark {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background 300ms ease, color 300ms ease;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Layout === */
.page {
  max-width: 760px;
  margin: 0 auto;
  padding: 4rem 1.5rem 8rem;
  display: flex;
  flex-direction: column;
  gap: 4rem;
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
}

/* === Intro === */
.intro {
  display: flex;
  gap: 3.5rem;
  justify-content: space-between;
  align-items: center;
}

.intro-heading {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.intro-bio p {
  font-size: 1.125rem;
  line-height: 1.75;
  margin-bottom: 1rem;
}

.intro-bio strong {
  font-weight: 600;
}

.avatar {
  flex-shrink: 0;
  width: 180px;
  height: 180px;
  border-radius: 50%;
  border: 4px solid var(--avatar-ring);
  background: var(--bg-subtle);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3.5rem;
  font-weight: 700;
  color: var(--accent);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

/* === Timeline (work history, education) === */
.timeline-lede {
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--text-muted);
  margin-top: 1rem;
}

.timeline-lede strong {
  font-weight: 600;
  color: var(--text);
}

.timeline {
  position: relative;
  list-style: none;
  border-left: 1px solid var(--border);
  margin-top: 1.5rem;
}

.timeline-item {
  position: relative;
  margin: 0 0 2.5rem 1rem;
}

.timeline-item:last-child {
  margin-bottom: 0;
}

.timeline-dot {
  position: absolute;
  left: -1.4rem;
  top: 0.4rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--accent);
  border: 1px solid var(--bg);
}

.timeline-period {
  display: block;
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-bottom: 0.25rem;
}

.timeline-heading {
  font-size: 1.125rem;
  font-weight: 600;
}

.timeline-org {
  color: var(--accent);
}

.timeline-details {
  list-style: disc outside;
  margin-left: 1.5rem;
  color: var(--text-muted);
}

.timeline-details li {
  line-height: 1.65;
  margin-top: 0.25rem;
}

/* === Contact === */
.contact-text {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.contact-link {
  color: var(--accent);
}

.copy-button {
  margin-top: 0.75rem;
  align-self: flex-start;
  font-size: 0.875rem;
  padding: 0.35rem 0.9rem;
  border-radius: 0.5rem;
  border: 1px solid var(--border);
  background: var(--bg-subtle);
  color: var(--text);
  cursor: pointer;
}

.copy-button.copied {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Dock === */
.dock-shell-side {
  position: fixed;
  left: 2.5rem;
  top: 0;
  bottom: 0;
  display: flex;
  align-items: center;
  z-index: 10;
}

.dock-shell-bottom {
  position: fixed;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  z-index: 10;
}

.dock {
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem;
  width: max-content;
  height: max-content;
  border-radius: 1rem;
  border: 1px solid var(--dock-border);
  background: var(--dock-bg);
  backdrop-filter: blur(12px);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.dock-icon {
  display: flex;
  aspect-ratio: 1 / 1;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  cursor: pointer;
}

.dock-link {
  display: flex;
  width: 100%;
  height: 100%;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  border: none;
  background: transparent;
  color: var(--text);
  cursor: pointer;
}

.dock-link:hover {
  background: var(--dock-hover);
}

.dock-link svg {
  width: 16px;
  height: 16px;
  stroke: currentColor;
}

.dock-separator-h {
  width: 1px;
  align-self: stretch;
  background: var(--border);
}

.dock-separator-v {
  height: 1px;
  width: 100%;
  background: var(--border);
}
"#;
