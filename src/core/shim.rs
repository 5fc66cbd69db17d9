//! Universal module-definition shim.
//!
//! The wrapper is a fixed literal with a tri-modal export strategy: an AMD
//! `define` when a loader is present, CommonJS-style `exports` otherwise,
//! and attachment to the global object as the final fallback. The footer
//! assigns the library namespace into whichever export target was detected.

/// Opening wrapper, prepended before the concatenated sources.
pub const PREAMBLE: &str = "( function ( root, factory ) {\n\n\tif ( typeof define === 'function' && define.amd ) {\n\n\t\tdefine( [ 'exports' ], factory );\n\n\t} else if ( typeof exports === 'object' ) {\n\n\t\tfactory( exports );\n\n\t} else {\n\n\t\tfactory( root );\n\n\t}\n\n}( this, function ( exports ) {\n\n";

/// Closing wrapper, appended after the concatenated sources.
pub const FOOTER: &str = "exports.UIL = UIL;\n\n} ) );";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_covers_all_three_export_modes() {
        assert!(PREAMBLE.contains("typeof define === 'function' && define.amd"));
        assert!(PREAMBLE.contains("typeof exports === 'object'"));
        assert!(PREAMBLE.contains("factory( root )"));
    }

    #[test]
    fn test_footer_exports_namespace() {
        assert!(FOOTER.starts_with("exports.UIL = UIL;"));
        assert!(FOOTER.ends_with("} ) );"));
    }
}
