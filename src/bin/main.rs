#[derive(clap::Parser)]
#[command(version, about)]
struct Cli {
    /// AWS region, default region if omitted
    #[arg(short = 'r', long, value_name = "REGION")]
    region: Option<String>,

    #[command(subcommand)]
    command: CliCommands,
}

#[derive(clap::Subcommand)]
enum CliCommands {
    /// Print the ARN of the certificate issued for a domain name
    Lookup {
        /// Exact domain name of the certificate
        domain_name: String,
    },
    /// Run the handler on a custom resource event, print the response without sending it
    Invoke {
        /// CloudFormation custom resource event in JSON
        #[arg(value_name = "EVENT FILE")]
        event_file: std::path::PathBuf,
    },
}

/// main() for generic environment
#[tokio::main]
async fn main() -> Result<(), cfn_lookup_acm::Error> {
    use cfn_lookup_acm::*;
    use clap::Parser;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let region = cli.region.map(aws_config::Region::new);
    let aws_sdk_config = aws_config_from_env(region).await;
    let certificates = AcmCertificates::new(&aws_sdk_config);

    match cli.command {
        CliCommands::Lookup { domain_name } => {
            let event = ProvisioningEvent {
                request_type: RequestType::Create,
                request_id: String::new(),
                response_url: String::new(),
                resource_type: String::new(),
                physical_resource_id: String::new(),
                logical_resource_id: String::new(),
                stack_id: String::new(),
                resource_properties: std::collections::HashMap::from([(
                    DOMAIN_NAME_PROPERTY.to_string(),
                    serde_json::Value::from(domain_name),
                )]),
                old_resource_properties: None,
            };
            let result = handle(&event, &certificates).await?;
            if let Some(arn) = result.certificate_arn() {
                println!("{}", arn);
            }
        }
        CliCommands::Invoke { event_file } => {
            let event_json = std::fs::read_to_string(event_file)?;
            let event = serde_json::from_str::<ProvisioningEvent>(&event_json)?;
            let response =
                custom_resource::build_response(&event, "local", &certificates).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
