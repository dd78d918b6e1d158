use anyhow::anyhow;
pub use assembly::Bicycle;
use crux_core::macros::effect;
use crux_core::render::RenderOperation;
pub use crux_core::Core;
use crux_core::{render, App, Command};
use parts::factory::PartsFactory;
use parts::part::PartDescriptor;
use parts::parts::Parts;
pub use parts::presets::Preset;
pub use stores::part_configs::PartConfigsSource;
pub use stores::spares::SparesSource;
use thiserror::Error;
use tracing::{info, trace};

#[derive(Default)]
pub struct SparesApp;

#[derive(Default)]
pub struct Model {
    assembly: Option<Bicycle>,
    error: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug)]
pub struct SparesViewModel {
    pub assembly: Option<Bicycle>,
    pub error: Option<String>,
}

#[effect]
pub enum Effect {
    Render(RenderOperation),
}

/// Where the part configurations come from.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum PartsSelection {
    Source(PartConfigsSource),
    Preset(Preset),
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub enum Event {
    None,
    /// Builds the assembly, replacing any previously built assembly.
    Build {
        size: String,
        parts: PartsSelection,
    },
    /// Stores the spares of the built assembly.
    StoreSpares {
        output: SparesSource,
    },
}

impl SparesApp {
    fn update_inner(&self, event: Event, model: &mut Model) -> Result<(), AppError> {
        match event {
            Event::None => Ok(()),
            Event::Build {
                size,
                parts,
            } => {
                info!("Building assembly. size: {}, parts: {:?}", size, parts);

                let parts = build_parts(&parts).map_err(AppError::OperationError)?;

                let assembly = Bicycle::builder()
                    .size(size)
                    .parts(parts)
                    .build()
                    .map_err(|cause| AppError::OperationError(cause.into()))?;

                info!(
                    "Built assembly. parts: {}, spares: {}",
                    assembly.parts().len(),
                    assembly.spares().len()
                );

                model.assembly.replace(assembly);
                Ok(())
            }
            Event::StoreSpares {
                output,
            } => {
                let assembly = model
                    .assembly
                    .as_ref()
                    .ok_or(AppError::OperationRequiresAssembly)?;

                stores::spares::store_spares(&output, assembly.spares().as_slice()).map_err(AppError::OperationError)?;

                Ok(())
            }
        }
    }
}

fn build_parts(selection: &PartsSelection) -> anyhow::Result<Parts> {
    let parts = match selection {
        PartsSelection::Source(source) => stores::part_configs::load_parts(source)?,
        PartsSelection::Preset(preset) => PartsFactory::build(preset.configs())
            .map_err(|cause| anyhow!("Building preset parts. preset: {}, cause: {}", preset, cause))?,
    };

    trace!(
        "parts: {:?}",
        parts
            .iter()
            .map(|part| part.name())
            .collect::<Vec<_>>()
    );

    Ok(parts)
}

impl App for SparesApp {
    type Event = Event;
    type Model = Model;
    type ViewModel = SparesViewModel;
    type Capabilities = ();
    type Effect = Effect;

    fn update(
        &self,
        event: Self::Event,
        model: &mut Self::Model,
        _caps: &Self::Capabilities,
    ) -> Command<Self::Effect, Self::Event> {
        match self.update_inner(event, model) {
            Err(e) => {
                model.error.replace(format!("{:?}", e));
            }
            Ok(()) => {
                model.error.take();
            }
        }

        // This causes the shell to request the view, via `view()`
        render::render()
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        let view_model = SparesViewModel {
            assembly: model.assembly.clone(),
            error: model.error.clone(),
        };

        trace!("view model: {:?}", view_model);

        view_model
    }
}

#[derive(Error, Debug)]
enum AppError {
    #[error("Operation requires an assembly")]
    OperationRequiresAssembly,
    #[error("Operation error, cause: {0}")]
    OperationError(anyhow::Error),
}

#[cfg(test)]
mod app_tests {
    use crux_core::App;
    use parts::part::{Part, PartDescriptor};
    use tempfile::tempdir;
    use util::source::Source;

    use super::*;

    fn update(model: &mut Model, event: Event) -> SparesViewModel {
        let app = SparesApp;
        let _command = app.update(event, model, &());
        app.view(model)
    }

    #[test]
    fn minimal() {
        // given
        let mut model = Model::default();

        // when
        let view = update(&mut model, Event::None);

        // then
        assert_eq!(view, SparesViewModel::default());
    }

    #[test]
    fn build_from_preset() {
        // given
        let mut model = Model::default();

        // when
        let view = update(&mut model, Event::Build {
            size: "L".to_string(),
            parts: PartsSelection::Preset(Preset::Mountain),
        });

        // then
        assert_eq!(view.error, None);
        let assembly = view.assembly.unwrap();
        assert_eq!(assembly.size(), "L");
        let spares: Vec<&str> = assembly
            .spares()
            .into_iter()
            .map(|part| part.name())
            .collect();
        assert_eq!(spares, vec!["chain", "tire_size", "rear_shock"]);
    }

    #[test]
    fn build_from_missing_source() {
        // given
        let mut model = Model::default();

        // when
        let view = update(&mut model, Event::Build {
            size: "L".to_string(),
            parts: PartsSelection::Source(Source::from_path("/definitely/not/here/parts.csv".into())),
        });

        // then
        assert!(view.assembly.is_none());
        assert!(view
            .error
            .unwrap()
            .contains("parts.csv"));
    }

    #[test]
    fn store_spares_requires_an_assembly() {
        // given
        let mut model = Model::default();

        // when
        let view = update(&mut model, Event::StoreSpares {
            output: Source::from_path("spares.csv".into()),
        });

        // then
        assert_eq!(view.error, Some("OperationRequiresAssembly".to_string()));
    }

    #[test]
    fn store_spares() -> anyhow::Result<()> {
        // given
        let temp_dir = tempdir()?;
        let output_path = temp_dir.path().join("spares.csv");
        let mut model = Model::default();
        update(&mut model, Event::Build {
            size: "M".to_string(),
            parts: PartsSelection::Preset(Preset::Road),
        });

        // when
        let view = update(&mut model, Event::StoreSpares {
            output: Source::from_path(output_path.clone()),
        });

        // then
        assert_eq!(view.error, None);
        let content = std::fs::read_to_string(output_path)?;
        assert!(content.contains(r#""tape_color","red""#));

        // and the assembly is unchanged
        let expected_first = Part::new("chain".to_string(), "10-speed".to_string());
        assert_eq!(view.assembly.unwrap().parts().first(), Some(&expected_first));

        Ok(())
    }
}
