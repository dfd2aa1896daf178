//! Tests de integración del pipeline de fulfillment con behaviors.

use opflow_adapters::behaviors::{RetryBehaviorFactory, TracingBehaviorFactory};
use opflow_adapters::operations::FulfillOrder;
use opflow_adapters::values::CustomerOrder;
use opflow_core::errors::EngineError;
use opflow_core::{RegistryResolver, WorkflowConfiguration, WorkflowEngine, WorkflowEvent,
                  WorkflowEventKind};

fn sample_order() -> CustomerOrder {
    CustomerOrder { order_id: "ORD-1001".into(),
                    items: vec!["widget".into(), "gadget".into()],
                    amount_cents: 12_500 }
}

fn configuration(gateway_failures: u32) -> WorkflowConfiguration {
    let resolver = RegistryResolver::new().register("fulfill_order", move || {
                                              Box::new(FulfillOrder::new(sample_order(),
                                                                         gateway_failures))
                                          });
    WorkflowConfiguration::new("fulfill_order").with_resolver(Box::new(resolver))
}

fn started_operations(events: &[WorkflowEvent]) -> Vec<String> {
    events.iter()
          .filter_map(|e| match &e.kind {
              WorkflowEventKind::OperationStarted { operation, .. } => Some(operation.clone()),
              _ => None,
          })
          .collect()
}

#[test]
fn pipeline_completes_with_one_retry() {
    let configuration = configuration(1)
        .with_behavior_factory(Box::new(TracingBehaviorFactory))
        .with_behavior_factory(Box::new(RetryBehaviorFactory::new(3)));
    let mut engine = WorkflowEngine::new(configuration);

    engine.run().expect("el pipeline debería completarse con un reintento");
    let events = engine.events().expect("eventos del run");

    assert_eq!(started_operations(&events),
               vec!["fulfill_order",
                    "receive_order",
                    "price_order",
                    "charge_payment",
                    "send_confirmation"]);

    let retries: Vec<u32> = events.iter()
                                  .filter_map(|e| match &e.kind {
                                      WorkflowEventKind::RetryScheduled { operation, attempt }
                                          if operation == "charge_payment" => Some(*attempt),
                                      _ => None,
                                  })
                                  .collect();
    assert_eq!(retries, vec![1]);

    // el cobro terminó publicando exactamente un recibo
    let charge_outputs = events.iter()
                               .find_map(|e| match &e.kind {
                                   WorkflowEventKind::OperationFinished { operation, outputs }
                                       if operation == "charge_payment" => Some(outputs.clone()),
                                   _ => None,
                               })
                               .expect("OperationFinished de charge_payment");
    assert_eq!(charge_outputs.len(), 1);
}

#[test]
fn exhausted_retries_fail_the_run_before_notifying() {
    let configuration = configuration(5)
        .with_behavior_factory(Box::new(RetryBehaviorFactory::new(2)));
    let mut engine = WorkflowEngine::new(configuration);

    let result = engine.run();
    assert_eq!(result,
               Err(EngineError::OperationFailed("payment gateway unavailable".into())));

    let events = engine.events().expect("eventos del run");
    let started = started_operations(&events);
    assert!(started.contains(&"charge_payment".to_string()));
    assert!(!started.contains(&"send_confirmation".to_string()),
            "tras el fallo no debe arrancar ningún hermano posterior");
    assert!(events.iter().any(|e| matches!(e.kind, WorkflowEventKind::WorkflowFailed { .. })));
}

#[test]
fn without_retry_behavior_a_flaky_gateway_is_fatal() {
    let mut engine = WorkflowEngine::new(configuration(1));
    let result = engine.run();
    assert_eq!(result,
               Err(EngineError::OperationFailed("payment gateway unavailable".into())));
}

#[test]
fn telemetry_digests_are_reproducible_between_runs() {
    let quote_digests = |events: &[WorkflowEvent]| -> Vec<String> {
        events.iter()
              .filter_map(|e| match &e.kind {
                  WorkflowEventKind::OperationFinished { operation, outputs }
                      if operation == "price_order" => Some(outputs.clone()),
                  _ => None,
              })
              .flatten()
              .collect()
    };

    let mut first = WorkflowEngine::new(configuration(0));
    first.run().expect("primer run ok");
    let first_digests = quote_digests(&first.events().expect("eventos"));

    let mut second = WorkflowEngine::new(configuration(0));
    second.run().expect("segundo run ok");
    let second_digests = quote_digests(&second.events().expect("eventos"));

    assert!(!first_digests.is_empty());
    assert_eq!(first_digests, second_digests,
               "mismos datos de entrada, mismos digests de salida");
}

#[test]
fn events_serialize_to_stable_json() {
    let configuration = configuration(1)
        .with_behavior_factory(Box::new(RetryBehaviorFactory::new(2)));
    let mut engine = WorkflowEngine::new(configuration);
    engine.run().expect("run ok");

    let events = engine.events().expect("eventos del run");
    let lines: Vec<String> = events.iter()
                                   .map(|e| serde_json::to_string(e).expect("serialize event"))
                                   .collect();
    assert!(lines.iter().any(|l| l.contains("RetryScheduled")));
    assert!(lines.iter().any(|l| l.contains("WorkflowCompleted")));
}
