//! Test fixtures - reusable shader sources and manifests for tests.

/// A minimal vertex shader without includes
pub const PLAIN_VS: &str = "float4 main(float4 p : POSITION) : SV_Position\n{\n    return p;\n}\n";

/// A minimal fragment shader without includes
pub const PLAIN_PS: &str = "float4 main() : SV_Target\n{\n    return float4(1, 0, 1, 1);\n}\n";

/// Shared header pulled in by `INCLUDING_VS`
pub const COMMON_HEADER: &str = "uniform float4 gTime;\n";

/// A vertex shader including `common.h`
pub const INCLUDING_VS: &str =
    "#include \"common.h\"\nfloat4 main(float4 p : POSITION) : SV_Position\n{\n    return p * gTime.x;\n}\n";

/// A fragment shader using a legacy bias sample
pub const BIAS_PS: &str =
    "float4 main(float4 uv : TEXCOORD0) : SV_Target\n{\n    return tex2Dbias(DiffuseMap, uv);\n}\n";

/// Manifest with one vertex and one fragment entry, no exclusions
pub const TWO_ENTRY_MANIFEST: &str = r#"[
    {"name": "plain_vs", "source": "plain_vs.hlsl", "target": "vs_3_0", "entrypoint": "main"},
    {"name": "plain_ps", "source": "plain_ps.hlsl", "target": "ps_3_0", "entrypoint": "main"}
]"#;

/// Manifest with a single vertex entry excluded for glsles
pub const EXCLUDED_FOR_GLSLES_MANIFEST: &str = r#"[
    {"name": "plain_vs", "source": "plain_vs.hlsl", "target": "vs_3_0", "entrypoint": "main",
     "exclude": "glsles"}
]"#;

/// Manifest with a geometry-stage profile the pipeline cannot map
pub const UNSUPPORTED_PROFILE_MANIFEST: &str = r#"[
    {"name": "weird_gs", "source": "plain_vs.hlsl", "target": "gs_4_0", "entrypoint": "main"}
]"#;

/// Manifest where two entries share a name
pub const DUPLICATE_NAME_MANIFEST: &str = r#"[
    {"name": "plain_vs", "source": "plain_vs.hlsl", "target": "vs_3_0", "entrypoint": "main"},
    {"name": "plain_vs", "source": "other_vs.hlsl", "target": "vs_3_0", "entrypoint": "main"}
]"#;
