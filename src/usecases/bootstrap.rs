use std::path::Path;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> anyhow::Result<AppContext> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> anyhow::Result<AppContext> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load()?;

    Ok(AppContext::new(config))
}
