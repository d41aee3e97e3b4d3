//! Global stylesheet for the landing page.
//!
//! Injected once as a `<style>` element at the top of the app. The reveal
//! rules pair with [`crate::reveal`]: elements start translated and
//! transparent, and the `visible` class the engine adds lets the transition
//! carry them into place.
//!
//! # Customization
//!
//! ```rust
//! use mettamate_site::styles::SITE_CSS;
//!
//! let themed = format!("{SITE_CSS}\n:root {{ --bhim-blue: #1E3A8A; }}");
//! assert!(themed.ends_with("}"));
//! ```

/// Complete CSS for the page - paper background, serif headings.
///
/// This CSS provides:
/// - Palette variables and base typography
/// - Scroll reveal transitions with three stagger delays
/// - Buttons, glass cards, section labels
/// - Carousel strips with hidden scrollbars
/// - One block per page section
pub const SITE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,500;0,600;0,700;1,400&family=Inter:wght@300;400;500;600&display=swap');

:root {
    --bhim-blue: #2A4B9B;
    --bhim-dark: #1A2F63;
    --paper: #F9F7F2;
    --paper-dark: #EFECE6;
    --text-main: #1C1C1E;
    --text-muted: #6B6B72;
    --warm-gold: #D4A056;
    --deep-gold: #B8863D;
    --sky: #9FB5F0;
    --font-serif: 'Playfair Display', serif;
    --font-sans: 'Inter', sans-serif;
    --ease-out: cubic-bezier(0.16, 1, 0.3, 1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background-color: var(--paper);
    color: var(--text-main);
    overflow-x: hidden;
    -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4, .serif {
    font-family: var(--font-serif);
    font-weight: 500;
    margin: 0;
}

p {
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
}

img {
    display: block;
}

.icon {
    flex-shrink: 0;
}

/* ============================================
   Reveal animations
   ============================================ */

.reveal-on-scroll {
    opacity: 0;
    transform: translateY(30px);
    transition: all 1s cubic-bezier(0.16, 1, 0.3, 1);
}

.reveal-on-scroll.visible {
    opacity: 1;
    transform: translateY(0);
}

.stagger-1 { transition-delay: 100ms; }
.stagger-2 { transition-delay: 200ms; }
.stagger-3 { transition-delay: 300ms; }

@keyframes pulse-soft {
    0% { transform: scale(1); opacity: 0.8; }
    50% { transform: scale(1.1); opacity: 1; }
    100% { transform: scale(1); opacity: 0.8; }
}

@keyframes pulse-ring {
    0% { transform: scale(0.8); box-shadow: 0 0 0 0 rgba(42, 75, 155, 0.4); }
    70% { transform: scale(1); box-shadow: 0 0 0 15px rgba(42, 75, 155, 0); }
    100% { transform: scale(0.8); box-shadow: 0 0 0 0 rgba(42, 75, 155, 0); }
}

@keyframes bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}

@keyframes blink-dot {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

.animate-pulse-slow {
    animation: pulse-soft 4s ease-in-out infinite;
}

.animate-pulse-ring {
    animation: pulse-ring 3s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@media (prefers-reduced-motion: reduce) {
    .reveal-on-scroll {
        transition: none;
    }
    .animate-pulse-slow,
    .animate-pulse-ring {
        animation: none;
    }
}

/* ============================================
   Components
   ============================================ */

.btn-primary {
    background-color: var(--bhim-blue);
    color: white;
    padding: 16px 36px;
    border-radius: 50px;
    font-weight: 500;
    transition: all 0.3s cubic-bezier(0.16, 1, 0.3, 1);
    display: inline-flex;
    align-items: center;
    gap: 12px;
    border: none;
    cursor: pointer;
    font-size: 1.05rem;
}

.btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 12px 24px rgba(42, 75, 155, 0.25);
    background-color: #234085;
}

.btn-outline {
    background-color: transparent;
    color: var(--bhim-blue);
    padding: 14px 32px;
    border-radius: 50px;
    font-weight: 500;
    border: 1px solid rgba(42, 75, 155, 0.3);
    transition: all 0.3s ease;
    cursor: pointer;
}

.btn-outline:hover {
    border-color: var(--bhim-blue);
    background-color: rgba(42, 75, 155, 0.05);
}

.text-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: #6B7280;
    border-bottom: 1px solid transparent;
    transition: all 0.2s ease;
}

.text-link:hover {
    color: var(--bhim-blue);
    border-color: var(--bhim-blue);
}

.glass-card {
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.6);
}

.section-label {
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: var(--bhim-blue);
    margin-bottom: 1rem;
    display: block;
}

.section-header {
    margin-bottom: 48px;
}

.section-header.centered {
    text-align: center;
}

.section-pill {
    display: inline-block;
    padding: 4px 12px;
    border-radius: 999px;
    background: rgba(42, 75, 155, 0.05);
    color: var(--bhim-blue);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 16px;
}

.section-title {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    color: var(--text-main);
    margin-bottom: 16px;
}

.section-subtitle {
    color: #4B5563;
    font-size: 1.125rem;
    line-height: 1.7;
    max-width: 42rem;
}

.section-header.centered .section-subtitle {
    margin: 0 auto;
}

.section-actions {
    margin-top: 32px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
}

/* ============================================
   Layout
   ============================================ */

.container-custom {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 768px;
}

.hide-scrollbar::-webkit-scrollbar {
    display: none;
}

.hide-scrollbar {
    -ms-overflow-style: none;
    scrollbar-width: none;
}

/* ============================================
   Navigation
   ============================================ */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 24px 0;
    transition: all 0.3s ease;
}

.nav.condensed {
    padding: 16px 0;
}

.nav-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 24px;
    border-radius: 999px;
    background: transparent;
    transition: all 0.3s ease;
}

.nav.condensed .nav-bar {
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.6);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.nav-brand {
    font-family: var(--font-serif);
    font-style: italic;
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.01em;
    color: var(--bhim-blue);
}

.nav-links {
    display: none;
    gap: 32px;
    font-size: 0.875rem;
    font-weight: 500;
    color: #4B5563;
    align-items: center;
}

.nav-link {
    transition: color 0.2s ease;
}

.nav-link:hover {
    color: var(--bhim-blue);
}

.nav-cta {
    background: var(--bhim-blue);
    color: white;
    border: none;
    padding: 10px 24px;
    border-radius: 999px;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.2s ease;
}

.nav-cta:hover {
    background: var(--bhim-dark);
}

/* ============================================
   Hero
   ============================================ */

.hero {
    position: relative;
    min-height: 95vh;
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    padding: 128px 0 80px;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    z-index: 0;
    background-size: cover;
    background-position: center;
    background-image: url("https://images.unsplash.com/photo-1529156069898-49953e39b3ac?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80");
    filter: brightness(0.95);
}

.hero-veil {
    position: absolute;
    inset: 0;
    z-index: 10;
    background: linear-gradient(to bottom, rgba(249, 247, 242, 0.8), rgba(249, 247, 242, 0.4), var(--paper));
}

.hero-content {
    position: relative;
    z-index: 20;
    text-align: center;
    max-width: 64rem;
}

.hero-badge-row {
    display: flex;
    justify-content: center;
    margin-bottom: 32px;
}

.hero-badge {
    background: rgba(255, 255, 255, 0.4);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.5);
    color: var(--bhim-dark);
    padding: 6px 20px;
    border-radius: 999px;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-weight: 700;
}

.hero-title {
    font-family: var(--font-sans);
    font-size: clamp(3.75rem, 10vw, 8rem);
    font-weight: 500;
    line-height: 1;
    letter-spacing: -0.025em;
    margin-bottom: 32px;
}

.hero-accent {
    font-family: var(--font-serif);
    font-style: italic;
    color: var(--bhim-blue);
}

.hero-lede {
    font-size: clamp(1.125rem, 2.2vw, 1.5rem);
    color: rgba(28, 28, 30, 0.7);
    max-width: 42rem;
    margin: 0 auto 48px;
    line-height: 1.6;
    font-weight: 300;
}

.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 16px;
    justify-content: center;
    align-items: center;
}

.hero-actions .btn-primary {
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.hero-online {
    font-size: 0.875rem;
    color: #6B7280;
    font-weight: 500;
}

.online-dot {
    display: inline-block;
    width: 8px;
    height: 8px;
    background: #22C55E;
    border-radius: 50%;
    margin-right: 8px;
}

/* ============================================
   Carousels
   ============================================ */

.carousel-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    margin-bottom: 48px;
}

.carousel-arrows {
    display: none;
    gap: 8px;
}

.carousel-arrow {
    padding: 12px;
    border-radius: 50%;
    border: 1px solid #E5E7EB;
    background: transparent;
    color: var(--text-main);
    cursor: pointer;
    display: inline-flex;
    transition: background 0.2s ease;
}

.carousel-arrow:hover {
    background: #F9FAFB;
}

.carousel-arrow.back .icon {
    transform: rotate(180deg);
}

.carousel-strip {
    display: flex;
    gap: 24px;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
}

.carousel-strip > * {
    flex: none;
    scroll-snap-align: center;
}

/* ============================================
   Showing up
   ============================================ */

.moments {
    padding: 80px 0;
    overflow: hidden;
    background: white;
}

.moments-title {
    font-size: 1.875rem;
    font-style: italic;
}

.moments .carousel-strip {
    padding: 0 24px 32px;
}

.moment-card {
    width: 300px;
    aspect-ratio: 4 / 5;
    position: relative;
    border-radius: 16px;
    overflow: hidden;
    cursor: pointer;
}

.moment-image,
.event-image,
.grow-photo,
.manifesto-photo img {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}

.moment-card:hover .moment-image,
.grow-card:hover .grow-photo {
    transform: scale(1.05);
}

.moment-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
    opacity: 0.6;
}

.moment-body {
    position: absolute;
    bottom: 0;
    left: 0;
    padding: 32px;
    transition: transform 0.5s ease;
}

.moment-card:hover .moment-body {
    transform: translateY(-5px);
}

.moment-title {
    color: white;
    font-size: 1.5rem;
    font-style: italic;
    margin-bottom: 8px;
}

.moment-caption {
    color: rgba(255, 255, 255, 0.9);
    font-size: 0.875rem;
    font-weight: 500;
    opacity: 0;
    transition: opacity 0.5s ease 0.1s;
}

.moment-card:hover .moment-caption {
    opacity: 1;
}

/* ============================================
   Events
   ============================================ */

.events {
    padding: 96px 0;
    background: white;
    border-top: 1px solid #F3F4F6;
}

.events-title {
    font-size: 2.25rem;
}

.events .carousel-strip {
    padding: 0 16px 48px;
    margin: 0 -16px;
}

.event-card {
    width: 280px;
    height: 420px;
    border-radius: 24px;
    position: relative;
    overflow: hidden;
    cursor: pointer;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.5s ease;
}

.event-card:hover {
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.event-card:hover .event-image {
    transform: scale(1.1);
}

.event-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, var(--bhim-dark), rgba(26, 47, 99, 0.2), transparent);
    opacity: 0.9;
}

.event-body {
    position: absolute;
    inset: 0;
    padding: 32px;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}

.event-top {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
}

.event-date {
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(12px);
    color: white;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 12px;
    padding: 8px 12px;
    text-align: center;
}

.event-month {
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    opacity: 0.8;
}

.event-day {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-weight: 700;
    line-height: 1;
}

.event-type {
    background: rgba(212, 160, 86, 0.9);
    color: #3E2C10;
    padding: 4px 12px;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.event-copy {
    transform: translateY(8px);
    transition: transform 0.5s ease;
}

.event-card:hover .event-copy {
    transform: translateY(0);
}

.event-title {
    font-size: 1.5rem;
    color: white;
    margin-bottom: 12px;
    line-height: 1.25;
}

.event-desc {
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.875rem;
    line-height: 1.6;
    margin-bottom: 24px;
    font-weight: 500;
}

.event-more {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--warm-gold);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    opacity: 0;
    transition: opacity 0.5s ease 0.1s;
}

.event-card:hover .event-more {
    opacity: 1;
}

/* ============================================
   Manifesto
   ============================================ */

.manifesto {
    padding: 96px 0;
    background: var(--paper);
}

.manifesto-grid {
    display: grid;
    gap: 64px;
}

.manifesto-figure {
    display: none;
    position: relative;
}

.manifesto-photo {
    position: sticky;
    top: 128px;
    aspect-ratio: 4 / 5;
    border-radius: 24px;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.manifesto-quote {
    position: absolute;
    bottom: 32px;
    left: 32px;
    right: 32px;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    padding: 24px;
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.5);
}

.manifesto-quote blockquote {
    margin: 0 0 16px;
    color: var(--bhim-blue);
    font-family: var(--font-serif);
    font-style: italic;
    font-size: 1.25rem;
}

.quote-author {
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: #6B7280;
}

.manifesto-copy {
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 40px 0;
}

.manifesto-accent {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    color: var(--bhim-blue);
    margin: -40px 0 48px;
    line-height: 1.25;
}

.manifesto-body {
    display: flex;
    flex-direction: column;
    gap: 24px;
    font-size: 1.125rem;
    color: #4B5563;
    line-height: 1.7;
}

.manifesto-closing {
    color: var(--bhim-blue);
    font-weight: 500;
    font-style: italic;
    padding-top: 16px;
}

.guidelines-link {
    margin-top: 48px;
}

.underline-btn {
    background: none;
    border: none;
    border-bottom: 2px solid var(--bhim-blue);
    color: var(--bhim-blue);
    font-weight: 700;
    padding: 0 0 4px;
    cursor: pointer;
}

.underline-btn:hover {
    color: var(--bhim-dark);
}

/* ============================================
   Bridge
   ============================================ */

.bridge {
    padding: 80px 0;
    background: white;
}

.bridge-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    margin-top: 48px;
}

.bridge-item {
    text-align: center;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.bridge-icon {
    width: 56px;
    height: 56px;
    border-radius: 50%;
    background: rgba(42, 75, 155, 0.05);
    color: var(--bhim-blue);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 24px;
    transition: transform 0.3s ease, background 0.3s ease;
}

.bridge-icon:hover {
    transform: scale(1.1);
    background: rgba(42, 75, 155, 0.1);
}

.bridge-title {
    font-family: var(--font-sans);
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 12px;
}

.bridge-desc {
    color: #6B7280;
    font-size: 0.875rem;
    max-width: 20rem;
}

/* ============================================
   Grow
   ============================================ */

.grow {
    padding: 96px 0;
    background: var(--paper);
}

.grow-grid {
    display: grid;
    grid-template-columns: 1fr;
    grid-auto-rows: 350px;
    gap: 24px;
}

.grow-card {
    position: relative;
    overflow: hidden;
    border-radius: 24px;
}

.grow-card.mentorship {
    background: white;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.grow-tag {
    position: absolute;
    top: 32px;
    right: 32px;
    z-index: 20;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
    padding: 6px 16px;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--bhim-blue);
}

.grow-shade {
    position: absolute;
    inset: 0;
    z-index: 10;
    background: linear-gradient(to right, rgba(0, 0, 0, 0.6), transparent);
}

.mentorship-body {
    position: absolute;
    bottom: 0;
    left: 0;
    padding: 40px;
    z-index: 20;
    max-width: 32rem;
    color: white;
}

.mentor-row {
    margin-bottom: 24px;
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: 0.875rem;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.9);
}

.avatar-stack {
    display: flex;
}

.avatar-stack img {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: 2px solid rgba(255, 255, 255, 0.3);
    margin-left: -16px;
}

.avatar-stack img:first-child {
    margin-left: 0;
}

.grow-card-title {
    font-size: 1.5rem;
    margin-bottom: 8px;
}

.mentorship-body .grow-card-title,
.relationships .grow-card-title {
    font-size: 1.875rem;
    margin-bottom: 16px;
}

.mentorship-body p {
    color: rgba(255, 255, 255, 0.8);
    font-size: 1.125rem;
}

.grow-card.career,
.grow-card.stories {
    padding: 32px;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}

.grow-card.career {
    background: var(--bhim-blue);
    color: white;
}

.grow-card.career .icon {
    color: rgba(255, 255, 255, 0.5);
}

.grow-card.career p {
    color: rgba(255, 255, 255, 0.7);
    margin-bottom: 24px;
}

.stat-box {
    background: rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 16px;
}

.stat-box strong {
    font-size: 1.5rem;
    display: block;
}

.stat-box span {
    font-size: 0.75rem;
    text-transform: uppercase;
    opacity: 0.7;
}

.grow-card.stories {
    background: var(--warm-gold);
}

.grow-card.stories .icon {
    color: rgba(255, 255, 255, 0.6);
}

.grow-card.stories .grow-card-title {
    color: #3E2C10;
}

.grow-card.stories p {
    color: #5C4018;
    margin-bottom: 24px;
}

.soft-btn {
    align-self: flex-start;
    background: rgba(255, 255, 255, 0.2);
    color: #3E2C10;
    border: none;
    padding: 8px 16px;
    border-radius: 8px;
    font-size: 0.875rem;
    font-weight: 700;
    cursor: pointer;
    transition: background 0.2s ease;
}

.soft-btn:hover {
    background: rgba(255, 255, 255, 0.3);
}

.grow-card.relationships {
    background: white;
    border: 1px solid #F3F4F6;
    padding: 40px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 40px;
}

.relationships-copy {
    flex: 1;
}

.relationships-copy p {
    color: #4B5563;
    margin-bottom: 24px;
}

.relationships-kicker {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
    color: var(--deep-gold);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.arrow-link {
    background: none;
    border: none;
    padding: 0;
    color: var(--bhim-blue);
    font-weight: 700;
    display: flex;
    align-items: center;
    gap: 8px;
    cursor: pointer;
    transition: gap 0.2s ease;
}

.arrow-link:hover {
    gap: 12px;
}

.orbit {
    flex: 1;
    width: 100%;
    position: relative;
    height: 192px;
}

.orbit-outer {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    width: 192px;
    height: 192px;
    background: var(--paper);
    border-radius: 50%;
    border: 1px solid rgba(212, 160, 86, 0.3);
    display: flex;
    align-items: center;
    justify-content: center;
}

.orbit-inner {
    width: 128px;
    height: 128px;
    background: rgba(212, 160, 86, 0.1);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--warm-gold);
}

.orbit-avatar {
    position: absolute;
    border-radius: 50%;
    border: 2px solid white;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    animation: bob 3s ease-in-out infinite;
}

.orbit-avatar.high {
    top: 0;
    right: 40px;
    width: 48px;
    height: 48px;
}

.orbit-avatar.low {
    bottom: 0;
    left: 40px;
    width: 56px;
    height: 56px;
    animation-duration: 4s;
}

/* ============================================
   Voices
   ============================================ */

.voices {
    padding: 96px 0;
    background: white;
    position: relative;
    overflow: hidden;
}

.voices-glow {
    position: absolute;
    top: 0;
    right: 0;
    width: 500px;
    height: 500px;
    background: var(--paper);
    border-radius: 50%;
    filter: blur(64px);
    opacity: 0.5;
    transform: translate(50%, -50%);
}

.voices .container-custom {
    position: relative;
    z-index: 10;
}

.voices-grid {
    display: grid;
    gap: 32px;
}

.voice-card {
    padding: 40px;
    border-radius: 24px;
    background: var(--paper);
    transition: box-shadow 0.5s ease;
}

.voice-card:hover {
    box-shadow: 0 10px 15px -3px rgba(42, 75, 155, 0.05);
}

.voice-mark {
    margin-bottom: 24px;
    color: rgba(42, 75, 155, 0.2);
}

.voice-quote {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-style: italic;
    line-height: 1.6;
    margin-bottom: 32px;
    opacity: 0.8;
}

.voice-person {
    display: flex;
    align-items: center;
    gap: 16px;
}

.voice-avatar {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    object-fit: cover;
    border: 1px solid white;
    filter: grayscale(1);
    opacity: 0.8;
}

.voice-name {
    font-weight: 700;
}

.voice-role {
    font-size: 0.875rem;
    color: #6B7280;
}

/* ============================================
   Impact
   ============================================ */

.impact {
    padding: 96px 0;
    background: var(--bhim-blue);
    color: white;
    text-align: center;
}

.impact-head {
    margin-bottom: 64px;
}

.impact-head h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    margin-bottom: 16px;
}

.impact-head p {
    color: rgba(255, 255, 255, 0.8);
    font-size: 1.125rem;
    max-width: 42rem;
    margin: 0 auto;
}

.impact-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 48px;
}

.impact-value {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    margin-bottom: 8px;
}

.impact-label {
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: rgba(255, 255, 255, 0.6);
}

/* ============================================
   Global gathering
   ============================================ */

.gathering {
    padding: 96px 0;
    background: var(--paper);
    overflow: hidden;
}

.gathering-head {
    text-align: center;
    margin-bottom: 64px;
}

.gathering-head h2 {
    font-size: clamp(2.25rem, 5vw, 3rem);
    margin-bottom: 16px;
}

.gathering-head p {
    color: #4B5563;
    font-size: 1.125rem;
}

.world-map {
    position: relative;
    width: 100%;
    aspect-ratio: 2 / 1;
    max-width: 64rem;
    margin: 0 auto;
}

.map-silhouette,
.map-routes {
    width: 100%;
    height: 100%;
    pointer-events: none;
}

.map-silhouette {
    opacity: 0.1;
}

.map-routes {
    position: absolute;
    inset: 0;
    opacity: 0.2;
}

.city {
    position: absolute;
    cursor: pointer;
}

.city-ring {
    position: absolute;
    inset: -16px;
    border-radius: 50%;
    border: 1px solid rgba(42, 75, 155, 0.2);
}

.city-dot {
    width: 12px;
    height: 12px;
    background: var(--bhim-blue);
    border-radius: 50%;
    position: relative;
    z-index: 10;
    transition: transform 0.3s ease;
}

.city:hover .city-dot {
    transform: scale(1.5);
}

.city-tip {
    position: absolute;
    left: 50%;
    bottom: 100%;
    margin-bottom: 12px;
    transform: translate(-50%, 8px);
    width: max-content;
    text-align: center;
    opacity: 0;
    pointer-events: none;
    z-index: 20;
    transition: all 0.3s ease;
    background: white;
    padding: 8px 16px;
    border-radius: 8px;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    border: 1px solid #F3F4F6;
}

.city:hover .city-tip {
    opacity: 1;
    transform: translate(-50%, 0);
}

.city-name {
    display: block;
    font-family: var(--font-serif);
    font-weight: 700;
    font-size: 1.125rem;
}

.city-status {
    display: block;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #16A34A;
    font-weight: 700;
    margin-top: 4px;
}

/* ============================================
   Support
   ============================================ */

.support {
    padding: 96px 0;
    background: white;
}

.support-grid {
    display: grid;
    gap: 24px;
    margin-bottom: 48px;
}

.support-card {
    padding: 32px;
    border-radius: 24px;
    background: var(--paper);
    cursor: pointer;
    transition: background 0.3s ease;
}

.support-card:hover {
    background: #F0EBE0;
}

.support-card-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 24px;
}

.support-icon {
    width: 48px;
    height: 48px;
    background: white;
    border-radius: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: transform 0.3s ease;
}

.support-card:hover .support-icon {
    transform: scale(1.1);
}

.support-tag {
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    padding: 4px 8px;
    border-radius: 999px;
    border: 1px solid currentColor;
}

.support-card h3 {
    font-size: 1.25rem;
    margin-bottom: 12px;
}

.support-card p {
    color: #4B5563;
    font-size: 0.875rem;
    line-height: 1.6;
}

.tone-blue { color: var(--bhim-blue); }
.tone-gold { color: var(--deep-gold); }
.tone-green { color: #15803D; }
.tone-dark { color: var(--bhim-dark); }

.support-tag.tone-blue { background: rgba(42, 75, 155, 0.05); border-color: rgba(42, 75, 155, 0.2); }
.support-tag.tone-gold { background: rgba(212, 160, 86, 0.1); border-color: rgba(212, 160, 86, 0.4); }
.support-tag.tone-green { background: rgba(22, 163, 74, 0.05); border-color: rgba(22, 163, 74, 0.2); }
.support-tag.tone-dark { background: rgba(26, 47, 99, 0.05); border-color: rgba(26, 47, 99, 0.2); }

/* ============================================
   Safety
   ============================================ */

.safety {
    padding: 96px 0;
    background: var(--bhim-dark);
    color: white;
    position: relative;
    overflow: hidden;
}

.safety-grid {
    display: grid;
    gap: 64px;
    align-items: center;
}

.safety-kicker {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
    color: var(--sky);
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.safety-title {
    font-size: clamp(2.25rem, 6vw, 3.75rem);
    margin-bottom: 32px;
    line-height: 1.25;
}

.safety-accent {
    color: var(--sky);
    font-style: italic;
}

.safety-lede {
    font-size: 1.125rem;
    color: rgba(255, 255, 255, 0.7);
    margin-bottom: 32px;
    line-height: 1.7;
    max-width: 28rem;
}

.safety-lede strong {
    color: rgba(255, 255, 255, 0.9);
    font-weight: 400;
}

.safety-points {
    display: grid;
    gap: 24px;
}

.safety-point {
    display: flex;
    gap: 16px;
}

.safety-point-icon {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    color: var(--sky);
}

.safety-point h4 {
    font-family: var(--font-sans);
    font-weight: 700;
    font-size: 1.125rem;
}

.safety-point p {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.875rem;
}

.covenant-wrap {
    display: flex;
    justify-content: center;
}

.covenant {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 32px;
    border-radius: 24px;
    max-width: 24rem;
    width: 100%;
}

.covenant-head {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.875rem;
    font-weight: 500;
}

.live-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: #4ADE80;
    animation: blink-dot 2s ease-in-out infinite;
}

.covenant-text {
    color: rgba(255, 255, 255, 0.9);
    font-family: var(--font-serif);
    font-style: italic;
    font-size: 1.125rem;
    line-height: 1.7;
}

.covenant-btn {
    margin-top: 32px;
    width: 100%;
    padding: 12px 0;
    background: rgba(159, 181, 240, 0.1);
    color: var(--sky);
    border: none;
    border-radius: 8px;
    font-size: 0.875rem;
    font-weight: 700;
    cursor: pointer;
    transition: background 0.2s ease;
}

.covenant-btn:hover {
    background: rgba(159, 181, 240, 0.2);
}

/* ============================================
   FAQ
   ============================================ */

.faq {
    padding: 96px 0;
    background: var(--paper);
}

.faq-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.faq-item {
    border-bottom: 1px solid #E5E7EB;
    padding: 24px 0;
}

.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    text-align: left;
    background: none;
    border: none;
    padding: 0;
    cursor: pointer;
}

.faq-question:focus {
    outline: none;
}

.faq-question-text {
    font-family: var(--font-serif);
    font-size: 1.25rem;
    font-weight: 500;
    color: var(--text-main);
    padding-right: 32px;
}

.faq-toggle {
    color: var(--bhim-blue);
    flex-shrink: 0;
    display: inline-flex;
}

.faq-answer {
    overflow: hidden;
    max-height: 0;
    opacity: 0;
    transition: all 0.3s ease-in-out;
}

.faq-item.open .faq-answer {
    max-height: 24rem;
    opacity: 1;
    margin-top: 16px;
}

.faq-answer p {
    color: #4B5563;
    line-height: 1.7;
    padding-right: 32px;
}

/* ============================================
   Footer
   ============================================ */

.footer {
    padding: 96px 0;
    background: white;
    border-top: 1px solid #F3F4F6;
}

.footer-cta {
    max-width: 64rem;
    margin: 0 auto 80px;
}

.footer-heading {
    text-align: center;
    margin-bottom: 64px;
}

.footer-heading h2 {
    font-size: clamp(3rem, 8vw, 4.5rem);
    color: var(--bhim-blue);
    margin-bottom: 24px;
}

.footer-heading p {
    font-size: 1.25rem;
    color: #4B5563;
}

.footer-cards {
    display: grid;
    gap: 24px;
}

.join-card,
.newsletter-card {
    padding: 40px;
    border-radius: 24px;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    position: relative;
    overflow: hidden;
    transition: all 0.5s ease;
}

.join-card {
    background: var(--bhim-blue);
    color: white;
}

.join-card:hover {
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.join-watermark {
    position: absolute;
    top: 0;
    right: 0;
    padding: 32px;
    opacity: 0.1;
    transform: rotate(12deg);
    transition: transform 0.7s ease;
}

.join-card:hover .join-watermark {
    transform: rotate(12deg) scale(1.1);
}

.join-card h3,
.newsletter-card h3 {
    font-size: 1.875rem;
    margin-bottom: 12px;
}

.join-card p {
    color: var(--sky);
    margin-bottom: 32px;
    font-size: 1.125rem;
    line-height: 1.7;
}

.join-btn {
    width: 100%;
    background: white;
    color: var(--bhim-blue);
    padding: 16px 0;
    border: none;
    border-radius: 999px;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    cursor: pointer;
    transition: background 0.2s ease;
}

.join-btn:hover {
    background: #F0EBE0;
}

.newsletter-card {
    background: var(--paper);
    border: 1px solid #E5E7EB;
}

.newsletter-card:hover {
    border-color: rgba(42, 75, 155, 0.2);
}

.newsletter-card p {
    color: #4B5563;
    margin-bottom: 32px;
    font-size: 1.125rem;
    line-height: 1.7;
}

.newsletter-form {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.newsletter-input {
    flex: 1;
    padding: 16px 24px;
    border-radius: 999px;
    border: 1px solid #D1D5DB;
    background: white;
}

.newsletter-input:focus {
    outline: none;
    border-color: var(--bhim-blue);
}

.newsletter-btn {
    background: var(--text-main);
    color: white;
    padding: 16px 32px;
    border: none;
    border-radius: 999px;
    font-weight: 700;
    white-space: nowrap;
    cursor: pointer;
    transition: background 0.2s ease;
}

.newsletter-btn:hover {
    background: var(--bhim-blue);
}

.newsletter-notice {
    margin-top: 12px;
    font-size: 0.875rem;
    color: #15803D;
}

.newsletter-notice.error {
    color: #B91C1C;
}

.footer-links {
    padding-top: 40px;
    border-top: 1px solid #E5E7EB;
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
    font-size: 0.875rem;
    color: #6B7280;
}

.footer-col h4 {
    font-family: var(--font-sans);
    font-weight: 700;
    color: #111827;
    margin-bottom: 16px;
}

.footer-col ul {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.footer-col a:hover {
    color: var(--bhim-blue);
}

.footer-brand {
    font-family: var(--font-serif);
    font-style: italic;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--bhim-blue);
    margin-bottom: 16px;
}

.socials {
    display: flex;
    gap: 16px;
    margin-top: 16px;
}

.social {
    width: 32px;
    height: 32px;
    background: #F3F4F6;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    cursor: pointer;
    transition: all 0.2s ease;
}

.social:hover {
    background: var(--bhim-blue);
    color: white;
}

/* ============================================
   Responsive
   ============================================ */

@media (min-width: 640px) {
    .newsletter-form {
        flex-direction: row;
    }
}

@media (min-width: 768px) {
    .nav-links,
    .carousel-arrows {
        display: flex;
    }

    .hero {
        padding-top: 0;
    }

    .hero-actions {
        flex-direction: row;
    }

    .moments .carousel-strip {
        padding: 0 max(calc((100vw - 1280px) / 2), 24px) 32px;
    }

    .moment-card {
        width: 400px;
    }

    .events .carousel-strip {
        padding: 0 0 48px;
        margin: 0;
    }

    .event-card {
        width: 350px;
    }

    .manifesto-grid,
    .safety-grid,
    .footer-cards {
        grid-template-columns: repeat(2, 1fr);
    }

    .manifesto-figure {
        display: block;
    }

    .bridge-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .grow-grid,
    .voices-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .grow-card.wide {
        grid-column: span 2;
    }

    .grow-card.relationships {
        flex-direction: row;
    }

    .orbit {
        height: 100%;
    }

    .support-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .impact-grid,
    .footer-links {
        grid-template-columns: repeat(4, 1fr);
    }

    .impact-stat + .impact-stat {
        border-left: 1px solid rgba(255, 255, 255, 0.1);
    }

    .covenant-wrap {
        justify-content: flex-end;
    }
}

@media (min-width: 1024px) {
    .manifesto-grid {
        gap: 96px;
    }

    .bridge-grid,
    .support-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{REVEAL_CLASS, Stagger, VISIBLE_CLASS};

    fn rule<'a>(selector: &str) -> Option<&'a str> {
        let start = SITE_CSS.find(&format!("{selector} {{"))?;
        let body = &SITE_CSS[start..];
        let end = body.find('}')?;
        Some(&body[..end])
    }

    #[test]
    fn hidden_state_is_transparent_and_offset() {
        let hidden = rule(&format!(".{REVEAL_CLASS}")).expect("reveal rule");
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(30px)"));
        assert!(hidden.contains("cubic-bezier(0.16, 1, 0.3, 1)"));
    }

    #[test]
    fn visible_state_restores_position() {
        let shown = rule(&format!(".{REVEAL_CLASS}.{VISIBLE_CLASS}")).expect("visible rule");
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translateY(0)"));
    }

    #[test]
    fn every_stagger_class_has_a_delay() {
        for (stagger, delay) in [
            (Stagger::One, "100ms"),
            (Stagger::Two, "200ms"),
            (Stagger::Three, "300ms"),
        ] {
            let class = stagger.class().expect("stagger class");
            let rule = rule(&format!(".{class}")).expect("stagger rule");
            assert!(rule.contains(delay), "{class} should delay by {delay}");
        }
    }

    #[test]
    fn carousel_strips_hide_scrollbars() {
        assert!(SITE_CSS.contains(".hide-scrollbar::-webkit-scrollbar"));
        let rule = rule(".hide-scrollbar").expect("hide-scrollbar rule");
        assert!(rule.contains("scrollbar-width: none;"));
    }

    #[test]
    fn palette_is_defined() {
        for var in ["--bhim-blue: #2A4B9B", "--paper: #F9F7F2", "--warm-gold: #D4A056"] {
            assert!(SITE_CSS.contains(var), "missing {var}");
        }
    }
}
