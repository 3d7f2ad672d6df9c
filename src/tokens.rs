//! The site's single design-token table.
//!
//! Older token names used across earlier versions of the site are kept as deprecated
//! aliases that resolve onto a canonical token, so there is exactly one place a size or
//! colour is defined.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeStep {
    pub name: &'static str,
    pub size_rem: f64,
    pub line_height: f64,
    pub weight: u16,
    pub tracking_em: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceStep {
    pub name: &'static str,
    pub rem: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const TYPE_SCALE: [TypeStep; 7] = [
    TypeStep {
        name: "display",
        size_rem: 3.5,
        line_height: 1.05,
        weight: 800,
        tracking_em: -0.03,
    },
    TypeStep {
        name: "h1",
        size_rem: 2.5,
        line_height: 1.1,
        weight: 700,
        tracking_em: -0.02,
    },
    TypeStep {
        name: "h2",
        size_rem: 1.875,
        line_height: 1.2,
        weight: 700,
        tracking_em: -0.01,
    },
    TypeStep {
        name: "h3",
        size_rem: 1.375,
        line_height: 1.3,
        weight: 600,
        tracking_em: 0.0,
    },
    TypeStep {
        name: "body-lg",
        size_rem: 1.125,
        line_height: 1.6,
        weight: 400,
        tracking_em: 0.0,
    },
    TypeStep {
        name: "body",
        size_rem: 1.0,
        line_height: 1.6,
        weight: 400,
        tracking_em: 0.0,
    },
    TypeStep {
        name: "caption",
        size_rem: 0.8125,
        line_height: 1.4,
        weight: 500,
        tracking_em: 0.02,
    },
];

pub const SPACING: [SpaceStep; 9] = [
    SpaceStep { name: "0", rem: 0.0 },
    SpaceStep { name: "1", rem: 0.25 },
    SpaceStep { name: "2", rem: 0.5 },
    SpaceStep { name: "3", rem: 0.75 },
    SpaceStep { name: "4", rem: 1.0 },
    SpaceStep { name: "6", rem: 1.5 },
    SpaceStep { name: "8", rem: 2.0 },
    SpaceStep { name: "12", rem: 3.0 },
    SpaceStep { name: "16", rem: 4.0 },
];

pub const PALETTE: [Swatch; 8] = [
    Swatch { name: "background", hex: "#1e1e2e" },
    Swatch { name: "surface", hex: "#313244" },
    Swatch { name: "foreground", hex: "#cdd6f4" },
    Swatch { name: "muted", hex: "#7f849c" },
    Swatch { name: "cyan", hex: "#89dceb" },
    Swatch { name: "purple", hex: "#cba6f7" },
    Swatch { name: "green", hex: "#a6e3a1" },
    Swatch { name: "red", hex: "#f38ba8" },
];

/// Deprecated name -> canonical name.
const ALIASES: [(&str, Token); 14] = [
    ("heading-xl", Token::Type("display")),
    ("hero-title", Token::Type("display")),
    ("title", Token::Type("h1")),
    ("section-title", Token::Type("h2")),
    ("subtitle", Token::Type("h3")),
    ("lead", Token::Type("body-lg")),
    ("text-base", Token::Type("body")),
    ("small", Token::Type("caption")),
    ("space-xs", Token::Space("1")),
    ("space-sm", Token::Space("2")),
    ("space-md", Token::Space("4")),
    ("space-lg", Token::Space("8")),
    ("accent", Token::Color("cyan")),
    ("primary", Token::Color("purple")),
];

/// Reference to a canonical token by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Type(&'static str),
    Space(&'static str),
    Color(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    Type(&'static TypeStep),
    Space(&'static SpaceStep),
    Color(&'static Swatch),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    pub token: Resolved,
    pub deprecated: bool,
}

fn canonical(token: Token) -> Option<Resolved> {
    match token {
        Token::Type(n) => TYPE_SCALE.iter().find(|s| s.name == n).map(Resolved::Type),
        Token::Space(n) => SPACING.iter().find(|s| s.name == n).map(Resolved::Space),
        Token::Color(n) => PALETTE.iter().find(|s| s.name == n).map(Resolved::Color),
    }
}

/// Resolves a token name, canonical or deprecated. Bare names are tried against the
/// type scale, then the palette; spacing steps need their `space-` prefix.
pub fn lookup(name: &str) -> Option<Lookup> {
    if let Some((_, token)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
        return canonical(*token).map(|token| Lookup {
            token,
            deprecated: true,
        });
    }
    let token = match name.strip_prefix("space-") {
        Some(step) => canonical(Token::Space(SPACING.iter().find(|s| s.name == step)?.name)),
        None => TYPE_SCALE
            .iter()
            .find(|s| s.name == name)
            .map(Resolved::Type)
            .or_else(|| PALETTE.iter().find(|s| s.name == name).map(Resolved::Color)),
    }?;
    Some(Lookup {
        token,
        deprecated: false,
    })
}

pub fn deprecated_aliases() -> impl Iterator<Item = (&'static str, Token)> {
    ALIASES.into_iter()
}

/// Every canonical token as CSS custom properties on `:root`.
pub fn css_variables() -> String {
    let type_scale = TYPE_SCALE.iter().flat_map(|s| {
        [
            format!("--type-{}-size: {}rem;", s.name, s.size_rem),
            format!("--type-{}-leading: {};", s.name, s.line_height),
            format!("--type-{}-weight: {};", s.name, s.weight),
            format!("--type-{}-tracking: {}em;", s.name, s.tracking_em),
        ]
    });
    let spacing = SPACING
        .iter()
        .map(|s| format!("--space-{}: {}rem;", s.name, s.rem));
    let palette = PALETTE
        .iter()
        .map(|s| format!("--palette-{}: {};", s.name, s.hex));

    let body = type_scale
        .chain(spacing)
        .chain(palette)
        .map(|line| format!("  {line}\n"))
        .collect::<String>();
    format!(":root {{\n{body}}}")
}

impl TypeStep {
    pub fn style(&self) -> String {
        format!(
            "font-size: var(--type-{n}-size); line-height: var(--type-{n}-leading); \
             font-weight: var(--type-{n}-weight); letter-spacing: var(--type-{n}-tracking);",
            n = self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_resolves() {
        for (alias, token) in deprecated_aliases() {
            let found = lookup(alias).unwrap_or_else(|| panic!("{alias} should resolve"));
            assert!(found.deprecated);
            assert_eq!(Some(found.token), canonical(token));
        }
    }

    #[test]
    fn test_aliases_do_not_shadow_canonical_names() {
        for (alias, _) in deprecated_aliases() {
            assert!(TYPE_SCALE.iter().all(|s| s.name != alias));
            assert!(PALETTE.iter().all(|s| s.name != alias));
        }
    }

    #[test]
    fn test_canonical_lookup() {
        let h2 = lookup("h2").unwrap();
        assert!(!h2.deprecated);
        assert!(matches!(
            h2.token,
            Resolved::Type(TypeStep { size_rem, .. }) if *size_rem == 1.875
        ));

        assert!(matches!(
            lookup("space-12").unwrap().token,
            Resolved::Space(SpaceStep { rem, .. }) if *rem == 3.0
        ));
        assert!(matches!(lookup("cyan").unwrap().token, Resolved::Color(_)));
        assert_eq!(lookup("space-5"), None);
        assert_eq!(lookup("jumbo"), None);
    }

    #[test]
    fn test_type_scale_descends() {
        assert!(TYPE_SCALE.windows(2).all(|w| w[0].size_rem > w[1].size_rem));
        assert!(SPACING.windows(2).all(|w| w[0].rem < w[1].rem));
    }

    #[test]
    fn test_css_variables() {
        let css = css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --type-display-size: 3.5rem;\n"));
        assert!(css.contains("  --space-4: 1rem;\n"));
        assert!(css.contains("  --palette-cyan: #89dceb;\n"));
        assert!(css.ends_with('}'));
    }
}
