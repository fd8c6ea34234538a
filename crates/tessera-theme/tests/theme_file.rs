use tessera_engine::paint::Rgba;
use tessera_engine::text::FontSize;
use tessera_theme::{ColorValue, RadiusAxis, ThemeError, ThemeValues, XmlDocument};

const DEFAULT_THEME: &str = include_str!("data/default.xml");

fn load() -> ThemeValues {
    ThemeValues::parse(&XmlDocument::parse(DEFAULT_THEME).unwrap()).unwrap()
}

#[test]
fn every_entry_is_loaded() {
    let theme = load();
    assert_eq!(theme.colors.len(), 7);
    assert_eq!(theme.borders.len(), 2);
    assert_eq!(theme.fonts.len(), 2);
}

#[test]
fn scaled_color_resolves_against_base() {
    let theme = load();
    let hover = theme.resolve_rgb("accent_hover").unwrap();
    let accent = theme.resolve_rgb("accent").unwrap();
    assert!(hover.r > accent.r);
    assert_eq!(theme.resolve_rgb("shadow").unwrap().a, Rgba::channel_from_fraction(0.35));
}

#[test]
fn gradients_keep_stop_names() {
    let theme = load();
    let ColorValue::LinearGradient(g) = &theme.colors["button_bg"] else {
        panic!("button_bg should be a linear gradient");
    };
    let stops: Vec<_> = g.stops.iter().map(|s| (s.position, s.color.as_str())).collect();
    assert_eq!(stops, vec![(0, "white"), (100, "accent")]);

    let ColorValue::RadialGradient(r) = &theme.colors["focus_glow"] else {
        panic!("focus_glow should be a radial gradient");
    };
    assert_eq!(r.outer_radius, 1.5);
    assert_eq!(r.outer_radius_axis, RadiusAxis::Longest);
    assert_eq!(r.fixed_width_mm, 10.0);
}

#[test]
fn borders_and_fonts() {
    let theme = load();
    let dashed = &theme.borders["dashed"];
    assert_eq!(dashed.from.as_deref(), Some("thin"));
    assert_eq!(dashed.dashes, vec![1.0, 0.5]);
    assert_eq!(dashed.width, None);

    let thin = &theme.borders["thin"];
    assert_eq!(thin.rounded, Some(true));
    assert_eq!(thin.hradius.as_ref().and_then(|h| h.scale), Some(2));

    let title = &theme.fonts["title"];
    assert_eq!(title.from.as_deref(), Some("label"));
    assert_eq!(title.descriptor.size, Some(FontSize::Scale(1.4)));
}

#[test]
fn one_bad_value_fails_the_whole_theme() {
    let broken = DEFAULT_THEME.replace("<outer_radius>1.5</outer_radius>", "<outer_radius>1000</outer_radius>");
    let err = ThemeValues::parse_str(&broken).unwrap_err();
    match err {
        ThemeError::InElement { ref kind, ref id, .. } => {
            assert_eq!(kind, "color");
            assert_eq!(id, "focus_glow");
        }
        other => panic!("unexpected error {other:?}"),
    }
}
