use std::rc::Rc;

use sitefx_core::{
    ColorMode, DarkModePreference, ElementBox, EmailValidity, MemoryPreferences, MenuState,
    PageConfig, PreferenceStore, ScrollSnapshot, anchor_scroll_top, anchor_target_id,
    extract_video_id, parallax_offset, parse_speed, validate_email,
};

#[test]
fn scroll_frame_readouts_agree() {
    let config = PageConfig::default();
    let frame = ScrollSnapshot::new(600.0, 900.0, 3300.0);

    assert!((parallax_offset(frame.scroll_y, parse_speed(Some("0.3"))) - 180.0).abs() < 1e-9);
    assert!((parallax_offset(frame.scroll_y, parse_speed(None)) - 300.0).abs() < 1e-9);
    assert!((frame.progress_percent() - 25.0).abs() < 1e-9);
    assert!(frame.back_to_top_visible(config.back_to_top_threshold_px));

    let below_fold = ElementBox {
        top: 1200.0,
        height: 400.0,
    };
    let entering = ElementBox {
        top: 650.0,
        height: 400.0,
    };
    assert!(!frame.fade_in_visible(below_fold));
    assert!(frame.fade_in_visible(entering));
}

#[test]
fn dark_mode_flag_tracks_every_toggle() {
    let store = Rc::new(MemoryPreferences::new());
    let pref = DarkModePreference::new(Rc::clone(&store), PageConfig::default().storage_key);

    let mut mode = pref.initial_mode(false);
    assert_eq!(mode, ColorMode::Light);
    for _ in 0..3 {
        mode = mode.toggled();
        pref.save(mode).expect("memory store never fails");
        assert_eq!(store.get("darkMode").as_deref(), Some(mode.as_stored()));
        assert_eq!(pref.stored(), Some(mode));
    }
    assert_eq!(mode, ColorMode::Dark);
}

#[test]
fn double_menu_toggle_restores_closed_visuals() {
    let start = MenuState::from_open(false);
    let after = start.toggled().toggled();
    assert_eq!(after, start);
    assert_eq!(after.icon_class(), "fa-bars");
    assert!((0..5).all(|i| after.item_style(i).opacity.is_none()));
}

#[test]
fn anchor_navigation_math() {
    let config = PageConfig::default();
    let id = anchor_target_id("#services").expect("id");
    assert_eq!(id, "services");
    assert!((anchor_scroll_top(300.0, 50.0, config.header_offset_px) - 290.0).abs() < 1e-9);
}

#[test]
fn listed_examples_hold() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .map(|id| id.as_str().to_string()),
        Some("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(extract_video_id("https://example.com/video.mp4"), None);
    assert_eq!(validate_email("user@example.com"), EmailValidity::Valid);
    assert_eq!(validate_email("user@"), EmailValidity::Invalid);
    assert_eq!(validate_email(""), EmailValidity::Empty);
}
