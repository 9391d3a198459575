//! Responsive breakpoints and the navbar variant chosen for a viewport.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name exposed as `data-bp` on the body.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound, `None` for the widest tier.
    pub max_width: Option<u16>,
}

/// Phones in portrait.
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(479),
};
/// Phones in landscape.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
};
/// Tablets.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// Laptops and wider.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 4] = [XS, SM, MD, LG];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(LG)
}

/// Which navbar implementation renders for a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// Inline links with the search box in the bar.
    Desktop,
    /// Hamburger menu with a slide-in panel.
    Mobile,
}

/// Choose the navbar variant; anything narrower than [`MD`] is mobile.
#[must_use]
pub const fn nav_variant(bp: Breakpoint) -> NavVariant {
    if bp.min_width < MD.min_width {
        NavVariant::Mobile
    } else {
        NavVariant::Desktop
    }
}
