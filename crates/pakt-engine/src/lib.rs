use anyhow::{anyhow, Result};
use pakt_core::{EngineOptions, UpdateDirective};

#[derive(Debug, Clone, PartialEq)]
pub struct ReifyRequest {
    pub update: UpdateDirective,
}

pub trait Engine {
    fn reify(&mut self, request: ReifyRequest) -> Result<()>;
}

// Placeholder backend wired by the CLI until the resolver engine lands. It
// validates its options and records the request without touching the tree.
#[derive(Debug)]
pub struct PlanEngine {
    options: EngineOptions,
    last_request: Option<ReifyRequest>,
}

impl PlanEngine {
    pub fn new(options: EngineOptions) -> Result<Self> {
        if options.path.as_os_str().is_empty() {
            return Err(anyhow!("engine root path must not be empty"));
        }
        Ok(Self {
            options,
            last_request: None,
        })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn last_request(&self) -> Option<&ReifyRequest> {
        self.last_request.as_ref()
    }
}

impl Engine for PlanEngine {
    fn reify(&mut self, request: ReifyRequest) -> Result<()> {
        self.last_request = Some(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pakt_core::{EngineOptions, FlatOptions, UpdateDirective};

    use crate::{Engine, PlanEngine, ReifyRequest};

    #[test]
    fn rejects_empty_root_path() {
        let options = EngineOptions::assemble(&FlatOptions::default(), Path::new(""));
        let err = PlanEngine::new(options).expect_err("empty root must be rejected");
        assert!(
            err.to_string().contains("root path must not be empty"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn records_the_reify_request() {
        let options = EngineOptions::assemble(&FlatOptions::default(), Path::new("/project/a"));
        let mut engine = PlanEngine::new(options).expect("engine must construct");
        assert!(engine.last_request().is_none());

        engine
            .reify(ReifyRequest {
                update: UpdateDirective::All,
            })
            .expect("reify must succeed");

        assert_eq!(
            engine.last_request(),
            Some(&ReifyRequest {
                update: UpdateDirective::All,
            })
        );
        assert_eq!(engine.options().path, Path::new("/project/a"));
    }
}
