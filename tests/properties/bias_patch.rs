//! Property tests for the bias-sampling patch pass.

use proptest::prelude::*;

use shaderpack::patch_bias_samples;

/// Identifiers usable as sampler and coordinate arguments
fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,12}").unwrap()
}

/// Coordinate expressions without parentheses or top-level commas
fn coord_expr() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,8}( [-+*] [A-Za-z0-9_.]{1,6})?")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Each bias variant rewrites to its plain call with the
    /// coordinate projected and the bias argument gone.
    #[test]
    fn property_bias_variants_rewrite_exactly(
        sampler in ident(),
        coord in coord_expr(),
    ) {
        let cases = [
            ("tex2Dbias", "tex2D", ".xy"),
            ("texCUBEbias", "texCUBE", ".xyz"),
            ("tex3Dbias", "tex3D", ".xyz"),
        ];

        for (legacy, plain, swizzle) in cases {
            let input = format!("{legacy}({sampler}, {coord})");
            let expected = format!("{plain}({sampler}, ( {coord}){swizzle})");
            prop_assert_eq!(patch_bias_samples(&input), expected);
        }
    }

    /// PROPERTY: The pass preserves the two-argument shape - exactly one
    /// top-level comma survives in the rewritten call.
    #[test]
    fn property_rewrite_preserves_argument_count(
        sampler in ident(),
        coord in ident(),
    ) {
        let input = format!("tex2Dbias({sampler}, {coord})");
        let output = patch_bias_samples(&input);
        prop_assert_eq!(output.matches(',').count(), 1);
    }

    /// PROPERTY: Sources without the `bias` substring are untouched.
    #[test]
    fn property_no_bias_substring_is_identity(
        source in "[A-Za-z0-9 (),;.\\n]{0,200}",
    ) {
        prop_assume!(!source.contains("bias"));
        prop_assert_eq!(patch_bias_samples(&source), source);
    }

    /// PROPERTY: Never panics on arbitrary input.
    #[test]
    fn property_patch_never_panics(source in "(?s).{0,256}") {
        let _ = patch_bias_samples(&source);
    }
}
