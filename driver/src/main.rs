use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use wavecore::publish::{Credentials, FileOpt, PlotlyClient, Publisher};
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Plot sin(exp(x^2)) and publish it to a hosted plot service")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Compute and print the series without publishing
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Also draw the figure locally (.svg, otherwise bitmap)
    #[arg(long)]
    render: Option<PathBuf>,
    /// Name of the plot on the hosting service
    #[arg(long)]
    filename: Option<String>,
    /// Upload the local styling instead of stripping it
    #[arg(long, default_value_t = false)]
    keep_style: bool,
    /// Base URL of the hosting service
    #[arg(long)]
    endpoint: Option<String>,
    /// Policy when the filename already exists: new, overwrite, append, extend
    #[arg(long)]
    fileopt: Option<FileOpt>,
    /// JSON credentials file; defaults to PLOTLY_USERNAME/PLOTLY_API_KEY,
    /// then ~/.plotly/.credentials
    #[arg(long)]
    credentials: Option<PathBuf>,
}

fn apply_overrides(config: &mut WorkflowConfig, args: Args) {
    if let Some(render) = args.render {
        config.render = Some(render);
    }
    if let Some(filename) = args.filename {
        config.publish.filename = filename;
    }
    if args.keep_style {
        config.publish.strip_style = false;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(fileopt) = args.fileopt {
        config.publish.fileopt = fileopt;
    }
    if let Some(credentials) = args.credentials {
        config.credentials = Some(credentials);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let offline = args.offline;

    let mut config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };
    apply_overrides(&mut config, args);

    let runner = Runner::new(config.clone());

    if offline {
        let result = runner.execute(None)?;
        println!("x = {:?}", result.x);
        println!("y = {:?}", result.y);
        for note in &result.notes {
            info!("{}", note);
        }
        return Ok(());
    }

    let credentials = match &config.credentials {
        Some(path) => Credentials::from_file(path),
        None => Credentials::discover(),
    }
    .context("loading plot service credentials")?;
    let client = PlotlyClient::new(config.endpoint.clone(), credentials)
        .context("creating plot service client")?;

    let result = runner.execute(Some(&client as &dyn Publisher))?;
    if let Some(embed) = &result.embed {
        println!("{}", embed.url);
        info!("embed: {}", embed.iframe_html());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_config() -> WorkflowConfig {
        let mut temp = NamedTempFile::new().unwrap();
        let yaml = "endpoint: http://yaml.example\n\
                    render: from-yaml.png\n\
                    publish:\n  filename: from-yaml\n  fileopt: append\n";
        temp.write_all(yaml.as_bytes()).unwrap();
        WorkflowConfig::load(temp.path()).unwrap()
    }

    #[test]
    fn flags_override_yaml_values() {
        let mut config = yaml_config();
        let args = Args::parse_from([
            "waveplot",
            "--filename",
            "from-flag",
            "--keep-style",
            "--endpoint",
            "http://flag.example",
            "--fileopt",
            "overwrite",
            "--render",
            "from-flag.svg",
            "--credentials",
            "creds.json",
        ]);
        apply_overrides(&mut config, args);

        assert_eq!(config.publish.filename, "from-flag");
        assert!(!config.publish.strip_style);
        assert_eq!(config.endpoint, "http://flag.example");
        assert_eq!(config.publish.fileopt, FileOpt::Overwrite);
        assert_eq!(config.render, Some(PathBuf::from("from-flag.svg")));
        assert_eq!(config.credentials, Some(PathBuf::from("creds.json")));
    }

    #[test]
    fn absent_flags_keep_yaml_values() {
        let mut config = yaml_config();
        apply_overrides(&mut config, Args::parse_from(["waveplot"]));

        assert_eq!(config, yaml_config());
        assert_eq!(config.publish.filename, "from-yaml");
        assert!(config.publish.strip_style);
        assert_eq!(config.publish.fileopt, FileOpt::Append);
    }

    #[test]
    fn bare_invocation_reproduces_fixed_run() {
        let mut config = WorkflowConfig::default();
        let args = Args::parse_from(["waveplot"]);
        assert!(!args.offline);
        apply_overrides(&mut config, args);
        assert_eq!(config, WorkflowConfig::default());
    }
}
