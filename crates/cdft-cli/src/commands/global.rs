use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::EnergyFile;
use crate::error::Result;
use crate::output::{self, Evaluation};
use cdft::core::diagnostics::DiagnosticCollector;
use cdft::models::descriptors::GlobalDescriptors;
use cdft::models::global::LinearGlobalModel;
use cdft::models::traits::GlobalModel;
use tracing::info;

pub fn run(args: GlobalArgs) -> Result<()> {
    info!("Loading energies from {:?}", &args.input);
    let input = EnergyFile::from_file(&args.input)?;

    let collector = DiagnosticCollector::new();
    let model = LinearGlobalModel::new(input.points())?.with_reporter(collector.reporter());
    info!("Built linear energy model at N0 = {}.", model.n0());

    let descriptors = GlobalDescriptors::from_model(&model)?;
    let evaluations = args
        .at
        .iter()
        .map(|&n| -> Result<Evaluation> {
            Ok(Evaluation::new(
                n,
                model.energy(Some(n))?,
                model.energy_derivative(Some(n), 1)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut writer = output::open_writer(args.output.as_deref())?;
    match args.format {
        OutputFormat::Pretty => {
            output::write_global_pretty(&mut writer, &descriptors, &evaluations, args.precision)?
        }
        OutputFormat::Toml => output::write_global_toml(&mut writer, &descriptors, &evaluations)?,
    }
    if let Some(path) = &args.output {
        println!("Global descriptors written to: {}", path.display());
    }

    super::summarize_diagnostics(&collector);
    Ok(())
}
