//! Starter configuration written by `weft-config init`

/// Template for a fresh project configuration.
pub const STARTER_CONFIG: &str = r#"# Files the scanner inspects for utility class usage.
content = ["./templates/**/*.html"]

# Plugin references, resolved by the generator.
plugins = []

# Design tokens layered over the default theme.
[theme.extend.colors]
"#;
