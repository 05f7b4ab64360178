//! Property-based invariant tests for the navigation stack.
//!
//! These verify the structural invariants that must hold for any sequence of
//! stack operations:
//!
//! 1. The stack never drops below length 1 while active.
//! 2. The root element never changes under push/pop/pop_to/pop_to_root.
//! 3. `pop_to_root` always yields exactly `[root]`.
//! 4. `pop_to` with a present target cuts at the occurrence nearest the top.
//! 5. No panics on arbitrary operation sequences.

use flownav_core::{NavigationStack, Screen};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Probe(u8);

impl Screen for Probe {
    fn id(&self) -> String {
        format!("probe-screen-{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Op {
    Push(Probe),
    Pop,
    PopTo(Probe),
    PopToRoot,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(|n| Op::Push(Probe(n))),
        Just(Op::Pop),
        (0u8..6).prop_map(|n| Op::PopTo(Probe(n))),
        Just(Op::PopToRoot),
    ]
}

fn apply(stack: &mut NavigationStack<Probe>, op: &Op) {
    match op {
        Op::Push(s) => stack.push(*s),
        Op::Pop => {
            stack.pop();
        }
        Op::PopTo(s) => {
            if stack.pop_to(s).is_none() {
                stack.pop();
            }
        }
        Op::PopToRoot => {
            stack.pop_to_root();
        }
    }
}

proptest! {
    #[test]
    fn depth_never_drops_below_one(root in 0u8..6, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut stack = NavigationStack::new(Probe(root));
        for op in &ops {
            apply(&mut stack, op);
            prop_assert!(stack.len() >= 1);
        }
    }

    #[test]
    fn root_is_stable(root in 0u8..6, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut stack = NavigationStack::new(Probe(root));
        for op in &ops {
            apply(&mut stack, op);
            prop_assert_eq!(stack.root(), Some(&Probe(root)));
        }
    }

    #[test]
    fn pop_to_root_yields_exactly_the_root(root in 0u8..6, ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut stack = NavigationStack::new(Probe(root));
        for op in &ops {
            apply(&mut stack, op);
        }
        stack.pop_to_root();
        prop_assert_eq!(stack.items(), &[Probe(root)][..]);
    }

    #[test]
    fn pop_to_cuts_nearest_the_top(prefix in prop::collection::vec(0u8..6, 0..16), target in 0u8..6, suffix in prop::collection::vec(0u8..6, 0..16)) {
        // Build root + prefix + target + suffix, where the suffix contains no
        // further occurrence of target; pop_to must remove exactly the suffix.
        let suffix: Vec<u8> = suffix.into_iter().filter(|n| *n != target).collect();
        let mut stack = NavigationStack::new(Probe(255));
        for n in &prefix {
            stack.push(Probe(*n));
        }
        stack.push(Probe(target));
        for n in &suffix {
            stack.push(Probe(*n));
        }

        let removed = stack.pop_to(&Probe(target)).expect("target present");
        let removed: Vec<u8> = removed.into_iter().map(|p| p.0).collect();
        prop_assert_eq!(removed, suffix);
        prop_assert_eq!(stack.top(), Some(&Probe(target)));
    }
}
