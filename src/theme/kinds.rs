use enum_assoc::Assoc;
use mosaic_macros::ThemeToken;

/// Built-in size scale keys.
///
/// Theme definitions may use any size key; these are the ones the bundled
/// theme ships styles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThemeToken)]
pub enum SizeKind {
    #[token("xs")]
    Xs,
    #[token("sm")]
    Sm,
    #[token("md")]
    Md,
    #[token("lg")]
    Lg,
    #[token("xl")]
    Xl,
}

/// Button variant keys shipped with the bundled theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThemeToken)]
pub enum ButtonVariant {
    Solid,
    Outline,
    Ghost,
    Link,
    Unstyled,
}

/// Common color scheme keys. Any palette name is accepted where a color
/// scheme is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThemeToken)]
pub enum ColorScheme {
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Cyan,
    Purple,
    Pink,
}

/// Main axis of a group of controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ThemeToken, Assoc)]
#[func(pub fn flex_direction(&self) -> &'static str)]
#[func(pub fn spacing_property(&self) -> &'static str)]
#[func(pub fn leading_radius_property(&self) -> &'static str)]
#[func(pub fn trailing_radius_property(&self) -> &'static str)]
pub enum Orientation {
    #[default]
    #[assoc(flex_direction = "row")]
    #[assoc(spacing_property = "marginStart")]
    #[assoc(leading_radius_property = "borderEndRadius")]
    #[assoc(trailing_radius_property = "borderStartRadius")]
    Horizontal,
    #[assoc(flex_direction = "column")]
    #[assoc(spacing_property = "marginTop")]
    #[assoc(leading_radius_property = "borderBottomRadius")]
    #[assoc(trailing_radius_property = "borderTopRadius")]
    Vertical,
}

/// Where a loading button places its spinner relative to the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ThemeToken, Assoc)]
#[func(pub fn margin_property(&self) -> &'static str)]
pub enum SpinnerPlacement {
    #[default]
    #[assoc(margin_property = "marginEnd")]
    Start,
    #[assoc(margin_property = "marginStart")]
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tokens_round_trip() {
        for size in [SizeKind::Xs, SizeKind::Sm, SizeKind::Md, SizeKind::Lg, SizeKind::Xl] {
            assert_eq!(SizeKind::from_token(size.token()), Some(size));
        }
        assert_eq!(SizeKind::from_token("huge"), None);
    }

    #[test]
    fn test_default_tokens_are_kebab_case() {
        assert_eq!(ButtonVariant::Solid.token(), "solid");
        assert_eq!(ColorScheme::Teal.to_string(), "teal");
        assert_eq!(String::from(Orientation::Vertical), "vertical");
    }

    #[test]
    fn test_orientation_properties() {
        assert_eq!(Orientation::Horizontal.flex_direction(), "row");
        assert_eq!(Orientation::Vertical.flex_direction(), "column");
        assert_eq!(Orientation::Vertical.spacing_property(), "marginTop");
        assert_eq!(Orientation::Horizontal.leading_radius_property(), "borderEndRadius");
    }

    #[test]
    fn test_spinner_placement_margin() {
        assert_eq!(SpinnerPlacement::default(), SpinnerPlacement::Start);
        assert_eq!(SpinnerPlacement::End.margin_property(), "marginStart");
    }
}
