//! Global CSS styles for the Advitya landing page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPLASH */
  --cream: #FFFDD0;
  --ink: #000000;

  /* RING COLOURS */
  --ring-blue: #0085C7;
  --ring-yellow: #F4C300;
  --ring-red: #DF0024;
  --ring-green: #009F3D;

  /* PARCHMENT */
  --sepia: #654321;
  --saddle: #8B4513;
  --ink-brown: #3d2817;
  --tan: #d2b48c;
  --tan-deep: #c19a6b;
  --gold: #d4af37;
  --badge-red: #8B0000;

  /* CALL TO ACTION */
  --cta-blue: #2D8CFF;
  --cta-blue-hover: #1d6fd6;

  /* Typography */
  --font-display: 'Fredericka the Great', cursive;
  --font-serif: Georgia, 'Times New Roman', serif;

  /* Easing */
  --ease-exit: cubic-bezier(0.43, 0.13, 0.23, 0.96);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-serif);
  background: var(--tan);
  min-height: 100vh;
}

/* === Landing === */
.landing {
  position: relative;
  min-height: 100vh;
}

/* === Countdown Overlay === */
.countdown-overlay {
  position: fixed;
  inset: 0;
  z-index: 9999;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background-color: var(--cream);
  transition: opacity 0.8s var(--ease-exit), transform 0.8s var(--ease-exit);
}

.overlay-entering {
  opacity: 0;
}

.overlay-visible {
  opacity: 1;
  transform: translateY(0);
}

.overlay-dismissing {
  opacity: 0;
  transform: translateY(-100%);
  pointer-events: none;
}

.countdown-glow {
  position: absolute;
  inset: 0;
  opacity: 0.05;
  background:
    radial-gradient(circle at 30% 40%, rgba(66, 133, 244, 0.3) 0%, transparent 60%),
    radial-gradient(circle at 70% 60%, rgba(234, 67, 53, 0.2) 0%, transparent 60%);
}

.countdown-content {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 0 1rem;
  animation: countdown-rise 0.8s ease-out 0.2s both;
}

.countdown-title-row {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
}

.countdown-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: -0.02em;
  color: var(--ink);
  text-shadow: 3px 3px 0 rgba(66, 133, 244, 0.2);
}

.countdown-year {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  display: inline-flex;
}

.countdown-scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--sepia);
  opacity: 0;
  animation: fade-in 0.8s ease 1.5s forwards;
}

.scroll-hint-chevron {
  display: inline-block;
  animation: hint-bob 1.5s ease-in-out infinite;
}

@keyframes countdown-rise {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes hint-bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(8px); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Choice Grid === */
.choose-path {
  position: relative;
  width: 100%;
  min-height: 100vh;
  padding: 0.75rem;
  overflow: auto;
  background: linear-gradient(135deg, var(--tan), var(--tan-deep), var(--tan));
  box-shadow: inset 0 0 60px rgba(101, 67, 33, 0.3);
  transition: opacity 0.6s ease;
}

.choose-path-border {
  position: absolute;
  inset: 0.5rem;
  border: 2px double var(--sepia);
  border-radius: 0.5rem;
  pointer-events: none;
}

.corner-flourish {
  position: absolute;
  font-size: 1.125rem;
  color: var(--sepia);
  opacity: 0.5;
}

.corner-flourish.top-left { top: 0.75rem; left: 0.75rem; }
.corner-flourish.top-right { top: 0.75rem; right: 0.75rem; transform: scaleX(-1); }
.corner-flourish.bottom-left { bottom: 0.75rem; left: 0.75rem; transform: scaleY(-1); }
.corner-flourish.bottom-right { bottom: 0.75rem; right: 0.75rem; transform: scale(-1); }

.choose-path-heading {
  position: relative;
  z-index: 10;
  text-align: center;
  padding-top: 0.5rem;
  margin-bottom: 0.5rem;
}

.choose-path-title {
  font-weight: 900;
  font-size: 1.25rem;
  color: var(--ink-brown);
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.choose-path-pill {
  display: inline-block;
  margin-top: 0.25rem;
  padding: 0.125rem 0.75rem;
  background: rgba(139, 69, 19, 0.15);
  border: 1px solid var(--sepia);
  border-radius: 9999px;
  font-style: italic;
  font-size: 10px;
  color: var(--sepia);
}

.choice-grid {
  position: relative;
  z-index: 10;
  display: grid;
  column-gap: 1rem;
  row-gap: 0.75rem;
  padding: 0.5rem 1rem;
}

.connector-layer {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  overflow: visible;
}

.connector-line {
  position: absolute;
  height: 2px;
  transform-origin: left center;
  background: repeating-linear-gradient(90deg, var(--saddle) 0px, var(--saddle) 6px, transparent 6px, transparent 12px);
  background-size: 12px 100%;
  opacity: 0;
  z-index: 1;
  pointer-events: none;
  animation:
    connector-fade 0.3s ease-out forwards,
    connector-march 0.6s linear infinite;
}

@keyframes connector-fade {
  from { opacity: 0; }
  to { opacity: 0.6; }
}

@keyframes connector-march {
  from { background-position-x: 0; }
  to { background-position-x: 12px; }
}

.choice-item {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  cursor: pointer;
  animation: choice-pop 0.4s cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

@keyframes choice-pop {
  from { opacity: 0; transform: scale(0); }
  to { opacity: 1; transform: scale(1); }
}

.choice-circle {
  position: relative;
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, #f4e4c1, var(--gold));
  border: 2px solid var(--sepia);
  border-radius: 9999px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.15);
  transition: all 0.2s ease;
}

.choice-item.selected .choice-circle {
  box-shadow: 0 0 12px rgba(218, 165, 32, 0.8);
  transform: scale(1.1);
}

.choice-icon {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--sepia);
}

.choice-badge {
  position: absolute;
  top: -0.125rem;
  right: -0.125rem;
  width: 1rem;
  height: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--badge-red);
  color: white;
  border: 1px solid var(--sepia);
  border-radius: 9999px;
  font-weight: 700;
  font-size: 7px;
}

.choice-label {
  margin-top: 0.25rem;
  padding: 0.125rem 0.375rem;
  background: rgba(244, 228, 193, 0.95);
  border: 1px solid var(--sepia);
  border-radius: 0.25rem;
  font-weight: 700;
  font-size: 7px;
  color: var(--ink-brown);
  white-space: nowrap;
}

.choice-tooltip {
  position: absolute;
  top: 100%;
  left: 50%;
  width: 9rem;
  margin-top: 0.25rem;
  transform: translateX(-50%);
  z-index: 1000;
  animation: tooltip-drop 0.15s ease both;
}

.choice-tooltip-card {
  background: linear-gradient(135deg, #f5e6d3, #e8d5b7);
  border: 1px solid var(--sepia);
  border-radius: 0.5rem;
  padding: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

.choice-tooltip-card h3 {
  font-size: 10px;
  font-weight: 700;
  color: var(--ink-brown);
  margin-bottom: 0.125rem;
  padding-bottom: 0.125rem;
  border-bottom: 1px solid var(--saddle);
  text-transform: uppercase;
}

.choice-tooltip-card p {
  font-size: 8px;
  line-height: 1.25;
  color: #4a3728;
}

@keyframes tooltip-drop {
  from { opacity: 0; transform: translate(-50%, -5px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

.games-back {
  margin: 1rem;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-cta {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
  font-family: inherit;
  font-weight: 600;
}

.btn-primary {
  padding: 0.5rem 1rem;
  background: transparent;
  border: 1px solid var(--sepia);
  border-radius: 0.5rem;
  color: var(--ink-brown);
}

.btn-ghost {
  padding: 0.5rem 1rem;
  background: transparent;
  border: none;
  color: var(--sepia);
}

.btn-cta {
  padding: 0.75rem 1.25rem;
  background: var(--cta-blue);
  color: white;
  border: 2px solid var(--ink);
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.5);
  transition: transform 0.3s ease, background-color 0.3s ease;
}

.btn-cta:hover {
  transform: scale(1.05);
  background: var(--cta-blue-hover);
}

.btn-cta:focus {
  outline: none;
}

.join-us-dock {
  position: fixed;
  bottom: 1.25rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
}

.join-us-arrow {
  display: inline-block;
  transform: rotate(-45deg);
  transition: transform 0.3s ease;
}

.join-us-btn:hover .join-us-arrow {
  animation: bounce-arrow 0.4s ease-in-out forwards;
}

@keyframes bounce-arrow {
  0%, 100% { transform: translate(0, 0) rotate(-45deg); }
  50% { transform: translate(4px, -4px) rotate(-45deg); }
}
"#;
