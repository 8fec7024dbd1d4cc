/// Page wiring and animation timing constants.
///
/// Element ids, selectors and class names the page markup provides, plus the
/// timings of the DOM-side effects. Physics constants live in
/// `core/constants.rs`.
// Elements
pub const CANVAS_ID: &str = "background-canvas";
pub const OVERLAY_ID: &str = "overlay";
pub const PROFILE_IMG_ID: &str = "profile-img";
pub const PROFILE_CARD_SELECTOR: &str = ".profile-card";
pub const SECTION_CIRCLE_SELECTOR: &str = ".section-circle";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-btn";
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const CARD_ID_SUFFIX: &str = "-card"; // detail card id = section + suffix
pub const ACTIVE_CLASS: &str = "active";

// Profile image fallback
pub const PROFILE_IMAGE_SRC: &str = "MyImage.jfif";
pub const PLACEHOLDER_INITIALS: &str = "PD";
pub const BADGE_SIZE_PX: u32 = 120;

// Entrance animation
pub const ENTRANCE_DELAY_MS: i32 = 500;
pub const ENTRANCE_STAGGER_MS: i32 = 200;
pub const ENTRANCE_START_SCALE: f32 = 0.8;
pub const ENTRANCE_TRANSITION: &str = "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)";

// Hover feedback
pub const HOVER_SCALE: f32 = 1.1;
pub const GLOW_MARGIN_PX: f64 = 10.0;
pub const GLOW_LIFETIME_MS: i32 = 600;

// Profile card float
pub const FLOAT_INTERVAL_MS: i32 = 50;
pub const FLOAT_AMPLITUDE_PX: f64 = 3.0;
pub const FLOAT_RATE_PER_MS: f64 = 0.001;

// Responsive layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MOBILE_CIRCLE_SCALE: f32 = 0.9;

/// Keyframes injected at startup for the glow and the profile card entrance.
pub const INJECTED_CSS: &str = r#"
@keyframes glowPulse {
    0% { opacity: 0; transform: scale(0.8); }
    50% { opacity: 1; transform: scale(1.1); }
    100% { opacity: 0; transform: scale(1.3); }
}

@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

.profile-card {
    animation: fadeInUp 0.8s ease-out;
}
"#;
