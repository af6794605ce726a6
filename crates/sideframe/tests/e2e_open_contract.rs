//! End-to-end coverage of the `open()` contract: validation, synchronous
//! side-effect order, width resolution, and scroll prevention.

use sideframe::{
    Config, OpenParams, Options, ReloadPolicy, SideframeError, SideframeSettings, Viewport,
};
use sideframe_core::{BREAKPOINT_MOBILE, RequestContext, ResolvedWidth};
use sideframe_harness::fixtures::ADMIN_URL;
use sideframe_harness::{TestRig, ToolbarCall};
use web_time::Duration;

#[test]
fn open_without_url_is_invalid() {
    let mut rig = TestRig::new();
    let err = rig.sideframe.open(OpenParams::default()).unwrap_err();
    assert_eq!(err, SideframeError::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "The arguments passed to open were invalid."
    );
}

#[test]
fn open_with_empty_url_is_invalid() {
    let mut rig = TestRig::new();
    let err = rig
        .sideframe
        .open(OpenParams {
            url: Some(String::new()),
            animate: false,
        })
        .unwrap_err();
    assert_eq!(err, SideframeError::InvalidArgument);
}

#[test]
fn open_with_url_succeeds_and_is_chainable() {
    let mut rig = TestRig::new();
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL))
        .unwrap()
        .close();
    assert!(!rig.sideframe.is_open());
}

#[test]
fn failed_open_has_no_side_effects() {
    let mut rig = TestRig::new();
    let _ = rig.sideframe.open(OpenParams::default());
    assert!(!rig.sideframe.view().dimmer.is_visible());
    assert!(rig.toolbar.calls().is_empty());
    assert!(!rig.sideframe.is_open());
}

#[test]
fn open_shows_the_dimmer() {
    let mut rig = TestRig::new();
    assert!(!rig.sideframe.view().dimmer.is_visible());
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert!(rig.sideframe.view().dimmer.is_visible());
}

#[test]
fn open_drives_the_toolbar_synchronously_in_order() {
    let mut rig = TestRig::new();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert_eq!(
        rig.toolbar.calls(),
        vec![
            ToolbarCall::ShowLoader,
            ToolbarCall::Open,
            ToolbarCall::Lock(true)
        ]
    );
}

#[test]
fn open_marks_the_container_as_loading() {
    let mut rig = TestRig::new();
    assert!(!rig.sideframe.view().container.has_class("cms-loader"));
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert!(rig.sideframe.view().container.has_class("cms-loader"));
}

#[test]
fn open_resets_history_unconditionally() {
    let mut rig = TestRig::new();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert!(rig.sideframe.history().is_empty());

    rig.sideframe.record_visit("/admin/cms/page/2/");
    assert!(!rig.sideframe.history().is_empty());
    assert!(rig.sideframe.view().history_back.is_enabled());

    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert!(rig.sideframe.history().is_empty());
    assert!(!rig.sideframe.view().history_back.is_enabled());
    assert!(!rig.sideframe.view().history_forward.is_enabled());
}

#[test]
fn open_replaces_the_previous_frame() {
    let mut rig = TestRig::new();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    let first = rig.sideframe.view().container.frame().unwrap().generation();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    let second = rig.sideframe.view().container.frame().unwrap().generation();
    assert_ne!(first, second);
}

#[test]
fn desktop_width_resolves_to_fraction() {
    let mut rig = TestRig::builder()
        .container_width(BREAKPOINT_MOBILE + 10.0)
        .build();
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL).animated())
        .unwrap();
    let animations = rig.sideframe.view().container.animations().to_vec();
    assert_eq!(animations.len(), 1);
    assert_eq!(animations[0].width, ResolvedWidth::Percent(0.8));
    assert_eq!(animations[0].width.to_string(), "80%");
    assert_eq!(animations[0].duration, Duration::from_millis(300));
}

#[test]
fn mobile_width_resolves_to_viewport_width() {
    let mut rig = TestRig::builder()
        .container_width(BREAKPOINT_MOBILE - 10.0)
        .viewport(Viewport {
            width: 420.0,
            touch: false,
        })
        .build();
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL).animated())
        .unwrap();
    let animations = rig.sideframe.view().container.animations().to_vec();
    assert_eq!(animations.len(), 1);
    assert_eq!(animations[0].width, ResolvedWidth::Pixels(420.0));
}

#[test]
fn persisted_position_overrides_computed_width() {
    let mut rig = TestRig::builder()
        .settings(SideframeSettings {
            url: None,
            position: Some(200.0),
        })
        .build();
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL).animated())
        .unwrap();
    let animations = rig.sideframe.view().container.animations().to_vec();
    assert_eq!(animations[0].width, ResolvedWidth::Pixels(200.0));
}

#[test]
fn reopening_at_the_same_width_skips_animation() {
    let mut rig = TestRig::builder()
        .settings(SideframeSettings {
            url: None,
            position: Some(200.0),
        })
        .build();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    assert!(rig.sideframe.view().container.animations().is_empty());

    // Same resolved width: no animation even with animate set.
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL).animated())
        .unwrap();
    assert!(rig.sideframe.view().container.animations().is_empty());
    assert_eq!(
        rig.sideframe.view().container.width(),
        Some(ResolvedWidth::Pixels(200.0))
    );
}

#[test]
fn custom_duration_is_used_for_animations() {
    let mut rig = TestRig::builder()
        .options(Options::new().with_duration(Duration::from_millis(310)))
        .build();
    rig.sideframe
        .open(OpenParams::url(ADMIN_URL).animated())
        .unwrap();
    assert_eq!(
        rig.sideframe.view().container.animations()[0].duration,
        Duration::from_millis(310)
    );
}

#[test]
fn request_params_are_appended_when_tree_matches() {
    let mut rig = TestRig::builder()
        .config(Config {
            request: RequestContext::new()
                .with_tree("edit.html")
                .with_language("de")
                .with_page_id("42"),
            debug: false,
        })
        .build();
    rig.sideframe
        .open(OpenParams::url("/admin/pages/edit.html"))
        .unwrap();
    assert_eq!(
        rig.sideframe.view().container.frame().unwrap().url(),
        "/admin/pages/edit.html?language=de&page_id=42"
    );
}

#[test]
fn request_params_are_omitted_when_tree_mismatches() {
    let mut rig = TestRig::builder()
        .config(Config {
            request: RequestContext::new()
                .with_tree("non-existent-url-part")
                .with_language("de")
                .with_page_id("42"),
            debug: false,
        })
        .build();
    rig.sideframe
        .open(OpenParams::url("/admin/pages/edit.html"))
        .unwrap();
    assert_eq!(
        rig.sideframe.view().container.frame().unwrap().url(),
        "/admin/pages/edit.html"
    );
}

#[test]
fn touch_viewport_prevents_scrolling_under_sideframe_tag() {
    let mut rig = TestRig::builder()
        .viewport(Viewport {
            width: 420.0,
            touch: true,
        })
        .build();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    let host = &rig.sideframe.view().host;
    assert!(host.has_body_class("cms-prevent-scrolling"));
    assert!(host.scroll.is_prevented_by("sideframe"));
}

#[test]
fn desktop_viewport_leaves_scrolling_alone() {
    let mut rig = TestRig::new();
    rig.sideframe.open(OpenParams::url(ADMIN_URL)).unwrap();
    let host = &rig.sideframe.view().host;
    assert!(!host.has_body_class("cms-prevent-scrolling"));
    assert!(!host.scroll.is_prevented());
}

#[test]
fn reload_policy_option_defaults_to_never() {
    let rig = TestRig::new();
    assert_eq!(rig.sideframe.options().reload_policy, ReloadPolicy::Never);
}
