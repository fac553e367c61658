//! Closed name sets recognized by the rewriter.
//!
//! Matching is restricted to these literal lists: a `motion.*` element or a
//! prop outside them is left untouched on purpose. Keep the lists ordered and
//! easy to audit instead of inferring names from markup structure.

/// Element names the `motion.` namespace can wrap.
///
/// HTML elements first, then the SVG subset framer-motion animates.
pub const MOTION_TAGS: &[&str] = &[
    // Containers
    "div", "span", "section", "article", "header", "footer", "main", "aside", "nav",
    // Text
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "a", "blockquote",
    // Lists and tables
    "ul", "ol", "li", "table", "tr", "td",
    // Interactive and media
    "button", "form", "label", "input", "img", "figure", "figcaption",
    // SVG
    "svg", "g", "path", "circle", "rect", "line", "polyline", "polygon",
];

/// Attribute names meaningful only to framer-motion.
pub const MOTION_PROPS: &[&str] = &[
    "initial",
    "animate",
    "exit",
    "transition",
    "variants",
    "whileHover",
    "whileTap",
    "whileFocus",
    "whileDrag",
    "whileInView",
    "viewport",
    "layout",
    "layoutId",
    "drag",
    "dragConstraints",
    "dragElastic",
    "dragMomentum",
    "onAnimationStart",
    "onAnimationComplete",
];

/// The presence wrapper component and its type-cast local alias.
pub const PRESENCE_WRAPPER: &str = "AnimatePresence";
pub const PRESENCE_ALIAS: &str = "AnimatePresenceFixed";

/// The package whose named import gets deleted.
pub const MOTION_PACKAGE: &str = "framer-motion";
