use anyhow::Result;
use sup_solar_estimator::{config, power_model::PowerModel, report, telemetry};
use config::Config;
use report::OutputFormat;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    let model = PowerModel::new(cfg.constants)?;

    let selection = cfg.selection;
    info!(
        tier = %selection.tier,
        season = %selection.season,
        language = %selection.language,
        all = cfg.output.all_combinations,
        "estimating SUP solar performance"
    );

    let evaluations = if cfg.output.all_combinations {
        model.evaluate_all(selection.language)
    } else {
        vec![model.evaluate(&selection)]
    };

    match cfg.output.format {
        OutputFormat::Json => println!("{}", report::render_json(&evaluations)?),
        OutputFormat::Text => {
            let pages: Vec<String> = evaluations
                .iter()
                .map(|evaluation| report::render_text(evaluation, model.constants()))
                .collect();
            print!("{}", pages.join("\n----------------------------------------\n\n"));
        }
    }

    Ok(())
}
