//! Tests for the template module.

use super::{Composer, Show, normalize};
use crate::action::{Action, Decoration};
use crate::context::{Context, EditFlags, MediaType};
use crate::environment::Environment;
use crate::host::recording::Recording;
use crate::menu::MenuItem;
use crate::window;

fn compose(composer: &Composer, context: &Context) -> Vec<MenuItem> {
    composer.compose(context, Environment::portable(), window::Id::MAIN)
}

/// Describes a template as `id`, `label` (for items without id) or `---`.
fn describe(template: &[MenuItem]) -> Vec<String> {
    template
        .iter()
        .map(|item| {
            if item.is_separator() {
                "---".to_owned()
            } else {
                item.id
                    .as_deref()
                    .map_or_else(|| item.label.clone(), str::to_owned)
            }
        })
        .collect()
}

fn assert_well_formed(template: &[MenuItem]) {
    assert!(!template.first().is_some_and(MenuItem::is_separator));
    assert!(!template.last().is_some_and(MenuItem::is_separator));
    assert!(
        template
            .windows(2)
            .all(|pair| !(pair[0].is_separator() && pair[1].is_separator()))
    );
}

fn editable(selection: &str) -> Context {
    Context {
        selection_text: selection.into(),
        is_editable: true,
        edit_flags: EditFlags::all(),
        ..Context::default()
    }
}

#[test]
fn test_normalize_drops_redundant_separators() {
    let template = vec![
        MenuItem::separator(),
        MenuItem::separator(),
        MenuItem::new("A"),
        MenuItem::separator(),
        MenuItem::new("Hidden").visible(false),
        MenuItem::separator(),
        MenuItem::new("B"),
        MenuItem::separator(),
    ];

    let normalized = normalize(template);

    assert_eq!(describe(&normalized), ["A", "---", "B"]);
}

#[test]
fn test_normalize_is_idempotent() {
    let template = vec![
        MenuItem::new("Unicorn"),
        MenuItem::separator(),
        MenuItem::separator(),
        MenuItem::new("Invisible").visible(false),
        MenuItem::separator(),
        MenuItem::new("Rainbow"),
        MenuItem::separator(),
    ];

    let once = normalize(template);
    let twice = normalize(once.clone());

    assert_eq!(describe(&once), describe(&twice));
    assert_eq!(describe(&once), ["Unicorn", "---", "Rainbow"]);
}

#[test]
fn test_normalize_only_separators() {
    let normalized = normalize(vec![MenuItem::separator(), MenuItem::separator()]);

    assert!(normalized.is_empty());
}

#[test]
fn test_empty_context_has_no_menu() {
    let template = compose(&Composer::new(), &Context::default());

    assert!(template.is_empty());
}

#[test]
fn test_non_editable_without_selection_has_no_edit_block() {
    let context = Context {
        edit_flags: EditFlags::all(),
        link_url: "https://example.com".into(),
        ..Context::default()
    };

    let template = compose(&Composer::new(), &context);
    let ids = describe(&template);

    for id in ["cut", "copy", "paste", "selectAll"] {
        assert!(!ids.iter().any(|item| item == id), "{id} in {ids:?}");
    }
}

#[test]
fn test_editable_selection() {
    let template = compose(&Composer::new(), &editable("hello"));

    assert_eq!(
        describe(&template),
        [
            "searchWithGoogle",
            "---",
            "cut",
            "copy",
            "paste",
            "selectAll",
        ]
    );
    assert!(template.iter().all(|item| item.enabled));
}

#[test]
fn test_image_context() {
    let context = Context {
        media_type: MediaType::Image,
        link_url: "https://example.com".into(),
        src_url: "https://example.com/a.png".into(),
        ..Context::default()
    };

    let composer = Composer::new().show(Show {
        save_image: true,
        save_image_as: true,
        copy_image_address: true,
        ..Show::default()
    });

    assert_eq!(
        describe(&compose(&composer, &context)),
        [
            "saveImage",
            "saveImageAs",
            "copyImage",
            "copyImageAddress"
        ]
    );
    assert_eq!(describe(&compose(&Composer::new(), &context)), ["copyImage"]);
}

#[test]
fn test_video_context() {
    let context = Context {
        media_type: MediaType::Video,
        src_url: "https://example.com/a.mp4".into(),
        ..Context::default()
    };

    let composer = Composer::new().show(Show {
        save_video: true,
        save_video_as: true,
        copy_video_address: true,
        ..Show::default()
    });

    assert_eq!(
        describe(&compose(&composer, &context)),
        ["saveVideo", "saveVideoAs", "copyVideoAddress"]
    );
}

#[test]
fn test_link_context() {
    let context = Context {
        link_url: "https://example.com".into(),
        link_text: "Example".into(),
        ..Context::default()
    };

    let composer = Composer::new().show(Show {
        save_image: true,
        save_link_as: true,
        ..Show::default()
    });

    assert_eq!(
        describe(&compose(&composer, &context)),
        ["copyLink", "saveLinkAs"]
    );
}

#[test]
fn test_inspect_element_follows_environment() {
    let context = editable("");
    let development = Environment {
        is_development: true,
        ..Environment::portable()
    };

    let composer = Composer::new();
    let ids = describe(&composer.compose(&context, development, window::Id::MAIN));
    assert_eq!(ids.last().map(String::as_str), Some("inspect"));

    let composer = Composer::new().show(Show {
        inspect_element: Some(false),
        ..Show::default()
    });
    let ids = describe(&composer.compose(&context, development, window::Id::MAIN));
    assert!(!ids.iter().any(|id| id == "inspect"));

    let composer = Composer::new().show(Show {
        inspect_element: Some(true),
        ..Show::default()
    });
    let ids = describe(&compose(&composer, &context));
    assert_eq!(ids, ["cut", "copy", "paste", "selectAll", "---", "inspect"]);
}

#[test]
fn test_spelling_block() {
    let context = Context {
        misspelled_word: Some("teh".into()),
        dictionary_suggestions: vec!["the".into(), "ten".into()],
        ..editable("teh")
    };

    let template = compose(&Composer::new(), &context);

    assert_eq!(
        describe(&template),
        [
            "dictionarySuggestions",
            "dictionarySuggestions",
            "---",
            "correctAutomatically",
            "---",
            "learnSpelling",
            "---",
            "searchWithGoogle",
            "---",
            "cut",
            "copy",
            "paste",
            "selectAll",
        ]
    );
    assert_eq!(template[0].label, "the");
    assert_eq!(template[1].label, "ten");
}

#[test]
fn test_every_toggle_is_well_formed() {
    let show_all = Show {
        learn_spelling: true,
        look_up_selection: true,
        search_with_google: true,
        select_all: true,
        save_image: true,
        save_image_as: true,
        copy_image: true,
        copy_image_address: true,
        save_video: true,
        save_video_as: true,
        copy_video_address: true,
        copy_link: true,
        save_link_as: true,
        inspect_element: Some(true),
        services: true,
    };
    let everything = Environment {
        supports_look_up: true,
        supports_services: true,
        is_development: true,
        can_build_native_menus: true,
    };

    let contexts = [
        Context::default(),
        editable(""),
        editable("word"),
        Context {
            misspelled_word: Some("teh".into()),
            ..editable("teh")
        },
        Context {
            media_type: MediaType::Image,
            ..Context::default()
        },
        Context {
            media_type: MediaType::Video,
            selection_text: "caption".into(),
            ..Context::default()
        },
        Context {
            link_url: "https://example.com".into(),
            ..editable("link")
        },
    ];

    for show in [Show::default(), show_all] {
        let composer = Composer::new()
            .show(show)
            .prepend(|actions, _, _| vec![actions.separator(), MenuItem::new("Front")])
            .append(|actions, _, _| vec![actions.separator(), actions.separator()]);

        for context in &contexts {
            let template = composer.compose(context, everything, window::Id::MAIN);

            assert_well_formed(&template);
            assert_eq!(describe(&normalize(template.clone())), describe(&template));
        }
    }
}

#[test]
fn test_prepend_and_append() {
    let composer = Composer::new()
        .prepend(|_, _, _| {
            vec![
                MenuItem::new("Unicorn"),
                MenuItem::separator(),
                MenuItem::separator(),
                MenuItem::new("Invisible").visible(false),
                MenuItem::new("Invisible").visible(false),
                MenuItem::separator(),
                MenuItem::separator(),
            ]
        })
        .append(|_, context, _| {
            vec![MenuItem::new("Rainbow").visible(context.media_type == MediaType::Image)]
        });

    let template = compose(&composer, &editable(""));

    assert_eq!(
        describe(&template),
        ["Unicorn", "---", "cut", "copy", "paste", "selectAll"]
    );
}

#[test]
fn test_menu_override_skips_default_layout() {
    let composer = Composer::new()
        .show(Show {
            inspect_element: Some(true),
            ..Show::default()
        })
        .menu(|actions, _, _| {
            vec![
                actions.separator(),
                actions.build(
                    Action::CopyLink,
                    Decoration::transform(|content| format!("modified_link_{content}")),
                ),
                actions.separator(),
                MenuItem::new("Unicorn"),
                actions.separator(),
                actions.build(
                    Action::Copy,
                    Decoration::transform(|content| format!("modified_copy_{content}")),
                ),
                MenuItem::new("Invisible").visible(false),
                actions.paste(),
            ]
        })
        .prepend(|_, _, _| vec![MenuItem::new("First"), MenuItem::separator()])
        .label("copy", "Configured Copy");

    let template = compose(&composer, &editable("hello"));

    assert_eq!(
        describe(&template),
        ["First", "---", "Unicorn", "---", "copy", "paste"]
    );
    assert_eq!(template[4].label, "Configured Copy");

    let mut host = Recording::default();
    template[4].activate(&mut host);
    assert_eq!(host.calls, ["clipboard modified_copy_hello -"]);
}

#[test]
fn test_menu_override_receives_window() {
    let target = window::Id::unique();
    let composer = Composer::new().menu(move |_, _, window| {
        vec![MenuItem::new(format!("Window {window}")).visible(window == target)]
    });

    let context = Context::default();

    assert_eq!(
        composer.compose(&context, Environment::portable(), target).len(),
        1
    );
    assert!(compose(&composer, &context).is_empty());
}

#[test]
fn test_label_overrides() {
    let composer = Composer::new()
        .labels([("copy", "X"), ("cut", "")])
        .append(|_, _, _| vec![MenuItem::new("Other").id("other")]);

    let template = compose(&composer, &editable("hello"));

    for item in &template {
        match item.id.as_deref() {
            Some("copy") => assert_eq!(item.label, "X"),
            Some("cut") => assert_eq!(item.label, "Cu&t"),
            Some("paste") => assert_eq!(item.label, "&Paste"),
            Some("other") => assert_eq!(item.label, "Other"),
            _ => {}
        }
    }
}

#[test]
fn test_selection_placeholder_is_truncated() {
    let selection = "abcdefghij".repeat(4);
    let composer = Composer::new().append(|_, _, _| vec![MenuItem::new("Find “{selection}”")]);

    let template = compose(&composer, &editable(&selection));

    assert_eq!(
        template.last().map(|item| item.label.as_str()),
        Some("Find “abcdefghijabcdefghijabcd…”")
    );
}

#[test]
fn test_selection_placeholder_measures_display_width() {
    let selection = "漢".repeat(20);
    let composer = Composer::new().append(|_, _, _| vec![MenuItem::new("{selection}")]);

    let template = compose(&composer, &editable(&selection));

    assert_eq!(
        template.last().map(|item| item.label.clone()),
        Some(format!("{}…", "漢".repeat(12)))
    );
}

#[test]
fn test_selection_placeholder_escapes_mnemonics() {
    let environment = Environment {
        supports_look_up: true,
        ..Environment::portable()
    };
    let context = Context {
        selection_text: " Fish & Chips ".into(),
        ..Context::default()
    };

    let template = Composer::new().compose(&context, environment, window::Id::MAIN);

    assert_eq!(template[0].label, "Look Up “Fish && Chips”");
}

#[test]
fn test_overridden_label_with_placeholder() {
    let environment = Environment {
        supports_look_up: true,
        ..Environment::portable()
    };
    let context = Context {
        selection_text: "word".into(),
        ..Context::default()
    };

    let template = Composer::new()
        .label("lookUpSelection", "Nachschlagen: {selection}")
        .compose(&context, environment, window::Id::MAIN);

    assert_eq!(template[0].label, "Nachschlagen: word");
}
