use clap::Parser;
use deckplan::{
    AudienceType, PipelineBuilder, PipelineError, PresentationOrchestrator, PresentationRequest,
    PresentationType, Tone,
};
use std::env;
use std::path::PathBuf;

/// Plans a slide deck and prints it as JSON.
#[derive(Parser, Debug)]
#[command(name = "deckplan", version, about, long_about = None)]
struct Args {
    /// Presentation title, or the free-text query with --quick
    #[arg(required_unless_present = "list")]
    title: Option<String>,

    /// Presentation type, e.g. investor_pitch
    #[arg(short = 't', long = "type", default_value = "business_presentation")]
    presentation_type: String,

    #[arg(short, long, default_value = "general_employees")]
    audience: String,

    /// Talk length in minutes
    #[arg(short, long, default_value_t = 20)]
    duration: u32,

    #[arg(long, default_value = "professional")]
    tone: String,

    #[arg(long)]
    industry: Option<String>,

    /// Directory with the CSV rule catalogs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    company: Option<String>,

    /// Detect the presentation type from keywords in the title
    #[arg(long, default_value_t = false)]
    quick: bool,

    /// List the available types, audiences and tones, then exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn print_choices() {
    println!("Presentation types:");
    for choice in PresentationOrchestrator::available_presentation_types() {
        println!("  {:<24} {}", choice.value, choice.name);
    }
    println!("\nAudiences:");
    for choice in PresentationOrchestrator::available_audiences() {
        println!("  {:<24} {}", choice.value, choice.name);
    }
    println!("\nTones:");
    for choice in PresentationOrchestrator::available_tones() {
        println!("  {:<24} {}", choice.value, choice.name);
    }
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "deckplan=info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    if args.list {
        print_choices();
        return Ok(());
    }
    let title = args
        .title
        .ok_or_else(|| PipelineError::Config("A presentation title is required.".to_string()))?;

    let mut builder = PipelineBuilder::new();
    if let Some(dir) = &args.data_dir {
        builder = builder.with_rules_dir(dir);
    }
    if let Some(author) = args.author {
        builder = builder.with_author(author);
    }
    if let Some(company) = args.company {
        builder = builder.with_company(company);
    }
    let orchestrator = builder.build()?;

    let document = if args.quick {
        orchestrator.quick_generate(&title, args.duration, &args.audience)
    } else {
        let mut request = PresentationRequest::builder(title)
            .presentation_type(PresentationType::parse_or_default(&args.presentation_type))
            .audience(AudienceType::parse_or_default(&args.audience))
            .duration_minutes(args.duration)
            .tone(Tone::parse_or_default(&args.tone));
        if let Some(industry) = args.industry {
            request = request.industry(industry);
        }
        orchestrator.generate_document(&request.build())
    };

    match args.output {
        Some(path) => {
            document.write_to_file(&path)?;
            eprintln!(
                "Wrote {} slides to {}",
                document.metadata.slide_count,
                path.display()
            );
        }
        None => println!("{}", document.to_json_string()?),
    }
    Ok(())
}
