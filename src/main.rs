//! Demo del runtime: un workflow de fulfillment con behaviors de trazas y
//! reintento. Imprime el log de eventos del run como JSON por línea.

mod config;

use opflow_adapters::behaviors::{RetryBehaviorFactory, TracingBehaviorFactory};
use opflow_adapters::operations::FulfillOrder;
use opflow_adapters::values::CustomerOrder;
use opflow_core::{RegistryResolver, WorkflowConfiguration, WorkflowEngine};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = config::AppConfig::from_env();
    let gateway_failures = settings.gateway_failures;

    let order = CustomerOrder { order_id: "ORD-1001".into(),
                                items: vec!["widget".into(), "gadget".into()],
                                amount_cents: 12_500 };

    let resolver = RegistryResolver::new().register("fulfill_order", move || {
                                              Box::new(FulfillOrder::new(order.clone(),
                                                                         gateway_failures))
                                          });

    let configuration = WorkflowConfiguration::new("fulfill_order")
        .with_resolver(Box::new(resolver))
        .with_behavior_factory(Box::new(TracingBehaviorFactory))
        .with_behavior_factory(Box::new(RetryBehaviorFactory::new(settings.max_attempts)));

    let mut engine = WorkflowEngine::new(configuration);

    let outcome = engine.run();
    if let Some(events) = engine.events() {
        for event in events {
            println!("{}", serde_json::to_string(&event).expect("serialize event"));
        }
    }

    match outcome {
        Ok(run_id) => println!("run {run_id} completado"),
        Err(error) => {
            eprintln!("run falló: {error}");
            std::process::exit(1);
        }
    }
}
