//! Emparejamiento de capacidades de punta a punta: un productor y dos
//! consumidores, uno por capacidad explícita (`ConsumesInput`) y otro por
//! campo declarado (macro).

use std::cell::RefCell;
use std::rc::Rc;

use opflow_core::context::{OperationContext, ScopeRegistry, SharedScopeRegistry};
use opflow_core::model::{DataKind, DataSpec, DataValue};
use opflow_core::operation::{apply_typed_input, ConsumesInput, Operation, OperationId,
                             OperationRunResult};
use opflow_core::{data_spec, operation};

data_spec!(Blueprint { code: String, revision: u32 });
data_spec!(Unrelated { note: String });

operation! {
    op DraftBlueprint {
        id: "draft_blueprint",
        produces: [Blueprint],
        run(me, _ctx) {
            me.emit(Blueprint { code: "BP-7".into(), revision: 2 });
            OperationRunResult::Success
        }
    }
}

// Consumidor por campo declarado (mecanismo del macro)
operation! {
    op ArchiveBlueprint {
        id: "archive_blueprint",
        consumes { blueprint: Blueprint },
        produces: [],
        run(_me, _ctx) {
            OperationRunResult::Success
        }
    }
}

// Consumidor por capacidad explícita
#[derive(Debug)]
struct ReviewBlueprint {
    instance_id: OperationId,
    received: Option<Blueprint>,
}

impl ReviewBlueprint {
    fn new() -> Self {
        Self { instance_id: OperationId::fresh(), received: None }
    }
}

impl ConsumesInput<Blueprint> for ReviewBlueprint {
    fn set_input(&mut self, value: Blueprint) {
        self.received = Some(value);
    }
}

impl Operation for ReviewBlueprint {
    fn id(&self) -> &str {
        "review_blueprint"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn consumes(&self) -> &[DataKind] {
        const CONSUMED: &[DataKind] = &[Blueprint::KIND];
        CONSUMED
    }

    fn apply_input(&mut self, value: &DataValue) {
        apply_typed_input::<Blueprint, _>(self, value);
    }

    fn execute(&mut self, _context: &OperationContext) -> OperationRunResult {
        OperationRunResult::Success
    }
}

#[test]
fn both_input_mechanisms_receive_the_produced_value() {
    let scopes: SharedScopeRegistry = Rc::new(RefCell::new(ScopeRegistry::new()));
    let anchor = DraftBlueprint::new();
    let context = OperationContext::create(&scopes, &anchor).expect("context");

    let mut producer = DraftBlueprint::new();
    context.register_output_handlers(&mut producer).expect("handlers");
    assert!(matches!(producer.execute(&context), OperationRunResult::Success));

    let mut explicit = ReviewBlueprint::new();
    context.provide_inputs(&mut explicit).expect("provide explicit");

    let mut by_field = ArchiveBlueprint::new();
    context.provide_inputs(&mut by_field).expect("provide by field");

    let expected = Blueprint { code: "BP-7".into(), revision: 2 };
    assert_eq!(explicit.received.as_ref(), Some(&expected));
    assert_eq!(by_field.blueprint.as_ref(), Some(&expected));
    // ambos reciben el mismo valor que emitió el productor
    assert_eq!(explicit.received, by_field.blueprint);
}

#[test]
fn absent_inputs_are_left_unset_without_error() {
    let scopes: SharedScopeRegistry = Rc::new(RefCell::new(ScopeRegistry::new()));
    let anchor = DraftBlueprint::new();
    let context = OperationContext::create(&scopes, &anchor).expect("context");

    // el store está vacío: proveer no falla y no inyecta nada
    let mut explicit = ReviewBlueprint::new();
    context.provide_inputs(&mut explicit).expect("provide sin datos");
    assert!(explicit.received.is_none());

    let mut by_field = ArchiveBlueprint::new();
    context.provide_inputs(&mut by_field).expect("provide sin datos");
    assert!(by_field.blueprint.is_none());
}

#[test]
fn undeclared_emissions_are_ignored_by_the_sink() {
    let scopes: SharedScopeRegistry = Rc::new(RefCell::new(ScopeRegistry::new()));
    let anchor = DraftBlueprint::new();
    let context = OperationContext::create(&scopes, &anchor).expect("context");

    let mut producer = DraftBlueprint::new();
    context.register_output_handlers(&mut producer).expect("handlers");
    // emitir un kind no declarado en `produces` se descarta
    producer.emit(Unrelated { note: "x".into() });
    assert!(context.is_empty());
}
