/// Profile record rendering
use auth_model::{CodecConfig, NullPolicy, ProfileCodec, ProfileField, Result, UserProfileRecord};
use std::io::Read;
use std::path::Path;

/// Command-line overrides applied on top of the loaded config
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Force `NullPolicy::Omit` regardless of config
    pub omit_nulls: bool,
    /// Pretty-print even when config says otherwise
    pub pretty: bool,
}

/// Load the codec config and apply command-line overrides
pub fn resolve_config(config_path: Option<&Path>, options: RenderOptions) -> Result<CodecConfig> {
    let mut config = match config_path {
        Some(path) => CodecConfig::load_from(path)?,
        None => CodecConfig::load()?,
    };
    if options.omit_nulls {
        config.null_policy = NullPolicy::Omit;
    }
    config.pretty |= options.pretty;
    Ok(config)
}

/// Decode a profile record from `input` and re-encode it in wire form
pub fn render<R: Read>(mut input: R, config: CodecConfig) -> Result<String> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;

    let codec = ProfileCodec::new(config);
    let record: UserProfileRecord = codec.decode(&raw)?;
    if record.is_blank() {
        tracing::warn!("Record has no profile fields set");
    }

    codec.encode(&record)
}

/// Field mapping table printed by `auth-model fields`
pub fn field_table() -> String {
    let mut out = String::from("Fields:\n");
    for field in ProfileField::ALL {
        out.push_str(&format!(
            "  {:<14} -> {}\n",
            field.logical_name(),
            field.as_str()
        ));
    }
    out
}
