//! Site-wide tuning constants.
//!
//! Motion feel, carousel cadence and breakpoints are centralized here so
//! every section stays consistent when the feel is adjusted.

/// Smooth-scroll interpolation settings.
pub mod motion {
    /// Exponential decay rate (per second) used when easing the scroll
    /// position toward its target. At 60 fps this closes a 500 px gap to
    /// under one pixel in less than a second.
    pub const SMOOTH_RATE: f64 = 8.0;
    /// Distance (px) under which the interpolator snaps to the target.
    pub const SETTLE_EPSILON: f64 = 0.05;
    /// Scale applied to raw wheel deltas before they move the target.
    pub const WHEEL_MULTIPLIER: f64 = 1.0;
}

/// Autoplay cadence for the lifestyle carousel.
pub mod autoplay {
    /// Interval between automatic slide transitions (ms).
    pub const INTERVAL_MS: f64 = 5_000.0;
    /// Quiet period after a manual navigation during which autoplay
    /// must not fire (ms).
    pub const QUIET_MS: f64 = 5_000.0;
    /// Granularity of the autoplay polling pulse (ms).
    pub const PULSE_MS: u32 = 250;
}

/// Responsive breakpoints (px) shared by the product carousel.
pub mod layout {
    pub const BREAKPOINT_SM: f64 = 640.0;
    pub const BREAKPOINT_LG: f64 = 1024.0;
}

/// Static media referenced by the sections. Opaque to the motion engine;
/// the display surface resolves them.
pub mod assets {
    pub const BANNER_VIDEO: &str = "/assets/video/banner.mp4";
    pub const EARBUD_VIDEO: &str = "/assets/video/earbud.mp4";

    pub const IMG_CIRCUIT: &str =
        "https://images.unsplash.com/photo-1555680202-c86f0e12f086?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_TECH_ABSTRACT: &str =
        "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_STUDIO: &str =
        "https://images.unsplash.com/photo-1511379938547-c1f69419868d?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_WORKSPACE: &str =
        "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_NEON: &str =
        "https://images.unsplash.com/photo-1614149162883-504ce4d13909?auto=format&fit=crop&q=80&w=1600";
    pub const IMG_GRID_DARK: &str =
        "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=1800";
    pub const IMG_EXPLODED: &str =
        "https://images.unsplash.com/photo-1629429408209-1f912961dbd8?auto=format&fit=crop&q=80&w=800";
    pub const IMG_OVEREAR: &str =
        "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?auto=format&fit=crop&q=80&w=2000";
    pub const IMG_KEYBOARD: &str =
        "https://images.unsplash.com/photo-1595225476474-87563907a212?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_MOUSE: &str =
        "https://images.unsplash.com/photo-1605773527852-c546a8584ea3?auto=format&fit=crop&q=80&w=1000";
    pub const IMG_BUDS: &str =
        "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?auto=format&fit=crop&q=80&w=600";
    pub const IMG_MIC: &str =
        "https://images.unsplash.com/photo-1590658006821-6d7b4b1e5914?auto=format&fit=crop&q=80&w=600";
    pub const IMG_OVEREAR_SMALL: &str =
        "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?auto=format&fit=crop&q=80&w=600";
    pub const IMG_CONTROLLER: &str =
        "https://images.unsplash.com/photo-1600080972464-8e5f35f63d08?auto=format&fit=crop&q=80&w=600";
    pub const IMG_KEYPAD: &str =
        "https://images.unsplash.com/photo-1587829741301-dc798b91a603?auto=format&fit=crop&q=80&w=600";
}
