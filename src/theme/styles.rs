//! Global CSS styles for the list demo.
//!
//! Binds the structural `mdc-list*` classes the components emit.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --on-surface: rgba(0, 0, 0, 0.87);
  --on-surface-medium: rgba(0, 0, 0, 0.6);
  --primary: #6200ee;
  --primary-tint: rgba(98, 0, 238, 0.12);
  --hover-tint: rgba(0, 0, 0, 0.04);
  --divider: rgba(0, 0, 0, 0.12);

  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--on-surface);
  line-height: 1.5;
}

/* === Demo Chrome === */
.demo {
  max-width: 560px;
  margin: 0 auto;
  padding: 1.5rem 1rem;
}

.demo-title {
  font-size: 1.5rem;
  font-weight: 400;
  margin-bottom: 1rem;
}

.demo-controls {
  display: flex;
  gap: 0.5rem;
  margin: 1rem 0;
}

.demo-controls button {
  font-family: inherit;
  padding: 0.4rem 0.9rem;
  border: 1px solid var(--divider);
  border-radius: 4px;
  background: transparent;
  cursor: pointer;
}

.demo-status {
  font-size: 0.875rem;
  color: var(--on-surface-medium);
}

/* === List === */
.mdc-list {
  list-style: none;
  padding: 8px 0;
  border-top: 1px solid var(--divider);
  border-bottom: 1px solid var(--divider);
}

.mdc-list-item {
  display: flex;
  align-items: center;
  height: 48px;
  padding: 0 16px;
  cursor: pointer;
  outline: none;
  transition: background var(--transition-fast);
}

.mdc-list--two-line .mdc-list-item {
  height: 72px;
}

.mdc-list-item:hover,
.mdc-list-item:focus {
  background: var(--hover-tint);
}

.mdc-list-item--activated,
.mdc-list-item--selected {
  background: var(--primary-tint);
  color: var(--primary);
}

.mdc-list-item--disabled {
  opacity: 0.38;
  cursor: default;
}

.mdc-list-item__graphic {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 24px;
  height: 24px;
  margin-right: 32px;
  color: var(--on-surface-medium);
}

.mdc-list-item__graphic img {
  width: 40px;
  height: 40px;
  border-radius: 50%;
}

.mdc-list-item__text {
  flex: 1;
  overflow: hidden;
  white-space: nowrap;
  text-overflow: ellipsis;
}

.mdc-list-item__primary-text,
.mdc-list-item__secondary-text {
  display: block;
}

.mdc-list-item__secondary-text {
  font-size: 0.875rem;
  color: var(--on-surface-medium);
}

.mdc-list-item__meta {
  margin-left: auto;
  padding-left: 16px;
  font-size: 0.75rem;
  color: var(--on-surface-medium);
}

.material-icons {
  font-style: normal;
  font-size: 24px;
}
"#;
