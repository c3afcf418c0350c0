//! Partial application of callables.

use std::rc::Rc;

use graft_value::{NativeFn, Value};

/// Fix leading arguments of a callable.
///
/// The returned callable invokes `func` with `fixed` followed by whatever
/// arguments it later receives. Only leading arguments are fixed; the
/// callable carries no receiver or context of its own, so whatever the
/// eventual caller supplies passes through untouched.
pub fn bind_with_args(func: &NativeFn, fixed: &[Value]) -> NativeFn {
    let func = Rc::clone(func);
    let fixed = fixed.to_vec();
    Rc::new(move |extra: &[Value]| {
        let mut args = Vec::with_capacity(fixed.len() + extra.len());
        args.extend(fixed.iter().cloned());
        args.extend(extra.iter().cloned());
        func(&args)
    })
}

/// [`bind_with_args`] lifted to [`Value`].
///
/// Non-callable values are returned unchanged rather than rejected.
pub fn bind_value(callable: &Value, fixed: &[Value]) -> Value {
    match callable {
        Value::Func(func) => Value::Func(bind_with_args(func, fixed)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn fixed_arguments_come_before_trailing_ones() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let func: NativeFn = Rc::new(move |args| {
            log.borrow_mut().extend(args.to_vec());
            Value::Null
        });

        let bound = bind_with_args(&func, &[Value::Int(1), Value::Int(2)]);
        bound(&[Value::Int(3), Value::Int(4)]);

        assert_eq!(
            *seen.borrow(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
        );
    }

    #[test]
    fn binding_nothing_is_a_passthrough() {
        let func: NativeFn = Rc::new(|args| Value::Int(args.len() as i64));
        let bound = bind_with_args(&func, &[]);
        assert_eq!(bound(&[Value::Null, Value::Null]), Value::Int(2));
    }

    #[test]
    fn bound_callable_can_be_rebound() {
        let func: NativeFn = Rc::new(|args| {
            let sum = args
                .iter()
                .map(|v| match v {
                    Value::Int(i) => *i,
                    _ => 0,
                })
                .sum();
            Value::Int(sum)
        });
        let once = bind_with_args(&func, &[Value::Int(1)]);
        let twice = bind_with_args(&once, &[Value::Int(2)]);
        assert_eq!(twice(&[Value::Int(3)]), Value::Int(6));
    }

    #[test]
    fn bind_value_wraps_callables_only() {
        let func = Value::func(|args| Value::Int(args.len() as i64));
        let bound = bind_value(&func, &[Value::Null]);
        match bound {
            Value::Func(f) => assert_eq!(f(&[]), Value::Int(1)),
            other => panic!("expected a callable, got {other:?}"),
        }

        let scalar = Value::Int(7);
        assert_eq!(bind_value(&scalar, &[Value::Null]), Value::Int(7));
    }
}
