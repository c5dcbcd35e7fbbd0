//! The DOM hook contract: every class/id this crate expects from the host
//! page (`www/index.html`). Components take the hooks they need as
//! parameters, so the selectors live in exactly one place.

// Scroll-linked animation
pub const ANIMATED: &str = ".scroll-animate";
pub const ANIM_ID_ATTR: &str = "data-anim-id";

// Custom cursor
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const CURSOR_CLICK_CLASS: &str = "cursor-click";

// Stardust canvases
pub const STARFIELD_CANVAS_ID: &str = "starfield";
pub const TRAIL_CANVAS_ID: &str = "trail-canvas";

// Audio player bar
pub const PROJECT_ITEM: &str = ".project-item";
pub const PROJECT_PREVIEW: &str = ".project-preview-bg";
pub const PLAYER_BAR: &str = ".audio-player-bar";
pub const PLAY_PAUSE_BTN: &str = ".play-pause-btn";
pub const PREV_BTN: &str = ".prev-btn";
pub const NEXT_BTN: &str = ".next-btn";
pub const TRACK_INFO: &str = ".track-info";
pub const SEEK_CONTAINER: &str = ".seek-container";
pub const SEEK_BAR: &str = ".seek-bar";
pub const VISUALIZER: &str = ".waveform-visualizer";
pub const VOLUME_BTN: &str = ".volume-btn";
pub const VOLUME_SLIDER: &str = ".volume-slider";
pub const VOLUME_WRAPPER: &str = ".volume-slider-wrapper";

// Video lightbox
pub const VIDEO_MODAL_ID: &str = "video-modal";
pub const MODAL_VIDEO_ID: &str = "modal-video-player";
pub const MODAL_CLOSE_BTN: &str = ".modal-close-btn";
pub const MODAL_CONTENT: &str = ".modal-content";
pub const GALLERY_ITEM: &str = ".gallery-item";
pub const GALLERY_INFO: &str = ".gallery-info";
pub const VIDEO_PLAY_BTN: &str = ".video-play-btn";
pub const VIDEO_TIME: &str = ".video-time";
pub const VIDEO_SEEK_CONTAINER: &str = ".video-seek-container";
pub const VIDEO_SEEK_BAR: &str = ".video-seek-bar";
pub const VIDEO_FULLSCREEN_BTN: &str = ".video-fullscreen-btn";
pub const VIDEO_CONTROLS: &str = ".video-controls";
pub const VIDEO_TITLE: &str = ".video-title";
pub const VIDEO_VOLUME_BTN: &str = ".video-volume-btn";
pub const VIDEO_VOLUME_SLIDER: &str = ".video-volume-slider";
pub const VIDEO_VOLUME_WRAPPER: &str = ".video-volume-slider-wrapper";

// Navigation / panels / gallery
pub const NAV_OVERLAY: &str = ".nav-overlay";
pub const FOOTER: &str = ".footer-section";
pub const HAMBURGER: &str = ".hamburger";
pub const MOBILE_MENU: &str = ".mobile-menu-overlay";
pub const MOBILE_MENU_CLOSE: &str = ".mobile-menu-close";
pub const MOBILE_NAV_ITEM: &str = ".mobile-nav-item";
pub const TOGGLE_BTN: &str = ".toggle-btn";
pub const WORKS_CONTAINER: &str = ".works-container";
pub const GALLERY_SCROLL: &str = ".gallery-scroll-container";
pub const TOOLS_STRIP: &str = ".tools-strip";

// Reveal classes driven by the intersection observer
pub const REVEAL_IN: &str = "scroll-in";
pub const REVEAL_OUT_TOP: &str = "scroll-out-top";
pub const REVEAL_HIDDEN_BOTTOM: &str = "scroll-hidden-bottom";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FIELD_NAME_ID: &str = "name";
pub const FIELD_EMAIL_ID: &str = "email";
pub const FIELD_MESSAGE_ID: &str = "message";
pub const SUBMIT_BTN: &str = ".submit-btn";
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
pub const CONTACT_HEADER: &str = ".contact-header";
