use clap::{CommandFactory, Parser};
use colored::Colorize;
use create_rext::{
    Config, FsCopier, Installer, ProjectName, ProjectPaths, ScaffoldReport, Scaffolder,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "create-rext")]
#[command(author, version, about = "Create a new rext project from the bundled template")]
struct Args {
    /// Name of the project directory to create in the current directory
    #[arg(required_unless_present = "completions")]
    project_name: Option<String>,

    /// Copy and configure the project but don't install dependencies
    #[arg(long)]
    skip_install: bool,

    /// Use a template directory instead of the bundled template
    #[arg(long, value_name = "DIR")]
    template: Option<PathBuf>,

    /// More diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<clap_complete::Shell>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(shell) = args.completions {
        clap_complete::generate(
            shell,
            &mut Args::command(),
            "create-rext",
            &mut std::io::stdout(),
        );
        return;
    }

    let Some(raw_name) = args.project_name.as_deref() else {
        eprintln!("Usage: create-rext <project-name>");
        std::process::exit(2);
    };

    let name = match ProjectName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => fail(&e.to_string(), e.exit_code()),
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => fail(&format!("Could not get current directory: {}", e), 1),
    };

    let config = Config::load(&cwd);
    let mut paths = ProjectPaths::resolve(&cwd, &name);
    if let Some(template) = args.template.as_ref().or(config.template.path.as_ref()) {
        paths = paths.with_template(&cwd, template);
    }

    let installer = config.installer();
    let install_hint = installer.describe();
    let skip_install = args.skip_install || config.install.skip;

    match Scaffolder::new(paths, FsCopier, installer)
        .skip_install(skip_install)
        .run()
    {
        Ok(report) => print_next_steps(&report, &install_hint),
        Err(e) => fail(&e.to_string(), e.exit_code()),
    }
}

fn print_next_steps(report: &ScaffoldReport, install_hint: &str) {
    let name = &report.paths.name;
    println!(
        "\n{}",
        format!("Project \"{}\" has been created successfully!", name)
            .green()
            .bold()
    );
    println!("Navigate to the project directory with:");
    println!("  {}", format!("cd {}", name).cyan());
    if !report.installed {
        println!("Install dependencies with:");
        println!("  {}", install_hint.cyan());
    }
    println!("Then start using the rext CLI tool.");
}

fn fail(message: &str, code: i32) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(code);
}

/// Diagnostics go to stderr; RUST_LOG wins over -v when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
