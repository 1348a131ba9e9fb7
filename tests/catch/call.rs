use std::cell::{Cell, RefCell};

#[test]
fn test_call_returns_supplier_value() {
    let calls = Cell::new(0);
    let value = catcher::call(
        || Ok::<_, &str>(5),
        |_| {
            calls.set(calls.get() + 1);
            0
        },
    );

    assert_eq!(value, 5);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_call_applies_fallback_to_error() {
    let value = catcher::call(|| Err::<usize, _>("four"), |e: &str| e.len());
    assert_eq!(value, 4);
}

#[test]
fn test_call_handled_success_skips_handler_and_fallback() {
    let handled = Cell::new(0);
    let fell_back = Cell::new(0);

    let value = catcher::call_handled(
        || Ok::<_, &str>("ok"),
        |_| handled.set(handled.get() + 1),
        || {
            fell_back.set(fell_back.get() + 1);
            "fallback"
        },
    );

    assert_eq!(value, "ok");
    assert_eq!(handled.get(), 0);
    assert_eq!(fell_back.get(), 0);
}

#[test]
fn test_call_handled_runs_handler_before_fallback() {
    let order = RefCell::new(Vec::new());

    let value = catcher::call_handled(
        || Err::<i32, _>("bad"),
        |e: &str| order.borrow_mut().push(format!("handler:{e}")),
        || {
            order.borrow_mut().push("fallback".to_string());
            -1
        },
    );

    assert_eq!(value, -1);
    assert_eq!(*order.borrow(), vec!["handler:bad".to_string(), "fallback".to_string()]);
}

#[test]
fn test_run_invokes_handler_only_on_failure() {
    let seen = RefCell::new(Vec::new());

    catcher::run(|| Ok::<(), &str>(()), |e| seen.borrow_mut().push(e));
    catcher::run(|| Err("write failed"), |e| seen.borrow_mut().push(e));

    assert_eq!(*seen.borrow(), vec!["write failed"]);
}

#[test]
fn test_with_runs_supplier_once() {
    let calls = Cell::new(0);
    let chain = catcher::with(|| {
        calls.set(calls.get() + 1);
        Ok::<_, &str>(1)
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(chain.get(), Ok(1));
}
