//! Propiedades de scoping del contexto: last-write-wins, aislamiento entre
//! hermanos, herencia hacia hijos y continuidad del store entre reintentos.

use std::cell::RefCell;
use std::rc::Rc;

use opflow_core::context::{OperationContext, ScopeRegistry, SharedScopeRegistry};
use opflow_core::operation::{Operation, OperationRunResult};
use opflow_core::{data_spec, operation, require_input};

data_spec!(Widget { part: String });
data_spec!(Badge { label: String });

operation! {
    op MakeWidget {
        id: "make_widget",
        produces: [Widget],
        run(me, _ctx) {
            me.emit(Widget { part: "w-1".into() });
            OperationRunResult::Success
        }
    }
}

// Consume un Widget y emite un Badge derivado.
operation! {
    op StampBadge {
        id: "stamp_badge",
        consumes { widget: Widget },
        produces: [Badge],
        run(me, _ctx) {
            let widget = require_input!(me.widget);
            me.emit(Badge { label: format!("badge:{}", widget.part) });
            OperationRunResult::Success
        }
    }
}

operation! {
    op Idle {
        id: "idle",
        produces: [],
        run(_me, _ctx) {
            OperationRunResult::Success
        }
    }
}

fn registry() -> SharedScopeRegistry {
    Rc::new(RefCell::new(ScopeRegistry::new()))
}

#[test]
fn last_write_wins_within_a_store() {
    let scopes = registry();
    let anchor = Idle::new();
    let context = OperationContext::create(&scopes, &anchor).expect("context");

    context.add_data(Widget { part: "first".into() });
    context.add_data(Widget { part: "second".into() });

    let current: Widget = context.get_output().expect("widget presente");
    assert_eq!(current.part, "second");
    assert_eq!(context.len(), 1, "un solo slot vivo por kind");
}

#[test]
fn sibling_that_never_received_a_kind_sees_nothing() {
    let scopes = registry();
    let parent = Idle::new();
    let shared = OperationContext::create(&scopes, &parent).expect("context del padre");

    // A produce Widget dentro del scope compartido entre hermanos
    let mut producer = MakeWidget::new();
    shared.register_output_handlers(&mut producer).expect("handlers");
    assert!(matches!(producer.execute(&shared), OperationRunResult::Success));
    assert!(shared.get_output::<Widget>().is_some());

    // B no declara consumir Widget: su scope propio queda vacío
    let mut bystander = Idle::new();
    shared.provide_inputs(&mut bystander).expect("provide");
    let b_context = OperationContext::create(&scopes, &bystander).expect("context de B");
    assert!(b_context.get_output::<Widget>().is_none(),
            "el output de A no debe filtrarse al scope de un hermano");
}

#[test]
fn children_inherit_received_and_produced_values() {
    let scopes = registry();
    let parent = Idle::new();
    let shared = OperationContext::create(&scopes, &parent).expect("context del padre");

    // valor dejado por un hermano anterior
    shared.add_data(Widget { part: "w-9".into() });

    let mut op = StampBadge::new();
    shared.register_output_handlers(&mut op).expect("handlers");
    shared.provide_inputs(&mut op).expect("provide");
    assert!(matches!(op.execute(&shared), OperationRunResult::Success));

    // el contexto de los hijos de `op` arranca con lo recibido y lo producido
    let child_context = OperationContext::create(&scopes, &op).expect("context hijo");
    let inherited_widget: Widget = child_context.get_output().expect("widget heredado");
    assert_eq!(inherited_widget.part, "w-9");
    let inherited_badge: Badge = child_context.get_output().expect("badge heredado");
    assert_eq!(inherited_badge.label, "badge:w-9");
}

#[test]
fn child_outputs_do_not_leak_back_to_the_parent_scope() {
    let scopes = registry();
    let parent = Idle::new();
    let parent_context = OperationContext::create(&scopes, &parent).expect("context del padre");
    parent_context.add_data(Widget { part: "w-2".into() });

    let spawner = StampBadge::new();
    let child_context = OperationContext::create(&scopes, &spawner).expect("context de hijos");

    let mut producer = MakeWidget::new();
    child_context.register_output_handlers(&mut producer).expect("handlers");
    assert!(matches!(producer.execute(&child_context), OperationRunResult::Success));

    assert!(child_context.get_output::<Widget>().is_some());
    // el scope del padre sigue con su propio valor, sin el emitido abajo
    let parent_widget: Widget = parent_context.get_output().expect("widget del padre");
    assert_eq!(parent_widget.part, "w-2");
    assert!(parent_context.get_output::<Badge>().is_none());
}

#[test]
fn recreating_a_context_for_the_same_instance_reuses_its_store() {
    let scopes = registry();
    let op = StampBadge::new();

    let first = OperationContext::create(&scopes, &op).expect("primer contexto");
    first.add_data(Widget { part: "kept".into() });

    // misma instancia (p. ej. reintento): mismo store, sin pérdida de datos
    let second = OperationContext::create(&scopes, &op).expect("segundo contexto");
    let widget: Widget = second.get_output().expect("valor del primer intento");
    assert_eq!(widget.part, "kept");

    // instancia distinta: store propio y vacío
    let other = StampBadge::new();
    let third = OperationContext::create(&scopes, &other).expect("contexto de otra instancia");
    assert!(third.get_output::<Widget>().is_none());
}
