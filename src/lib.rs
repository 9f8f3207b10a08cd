pub mod compiler;
pub mod display_width;
pub mod error;
pub mod event_parser;
pub mod graph_spec;
pub mod hit_test;
pub mod label_wrap;
pub mod theme;
pub mod transform;
pub mod validator;
pub mod viewport;

pub use compiler::{compile, compile_checked, compile_default};
pub use error::{Error, Result};
pub use graph_spec::GraphSpec;
pub use theme::RenderConfig;
pub use validator::{ValidationError, validate};

/// Parse a JSON graph spec and compile it, validating first unless
/// `check` is false.
pub fn compile_json(input: &str, config: &RenderConfig, check: bool) -> Result<String> {
    let spec = GraphSpec::from_json(input)?;
    if check {
        compile_checked(&spec, config)
    } else {
        Ok(compile(&spec, config))
    }
}
