//! Recursive flattening of nested sequences

use quiver_core::each;

/// An arbitrarily nested sequence
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    /// A single value
    Leaf(T),
    /// A sequence of further nestings
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Whether this node is a sequence
    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    /// Depth-first, left-to-right traversal of every leaf value
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Nested::Leaf(value) => vec![value.clone()],
            Nested::Seq(items) => {
                let mut leaves = Vec::new();
                for item in items {
                    leaves.extend(item.values());
                }
                leaves
            }
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

/// Flatten nested sequences into a single flat sequence of leaves
///
/// Depth-unlimited, preserving left-to-right leaf order. A leaf input
/// comes back unchanged. The recursive pass parks a residual sequence
/// element in the accumulator at every nested level it descends; the final
/// filter discards any element that is still a sequence, so none of those
/// markers survive into the result.
pub fn flatten<T: Clone>(input: &Nested<T>) -> Nested<T> {
    let items = match input {
        Nested::Seq(items) => items,
        Nested::Leaf(_) => return input.clone(),
    };

    let mut accumulated: Vec<Nested<T>> = Vec::new();
    collect(items, &mut accumulated);

    accumulated.retain(|element| !element.is_seq());
    Nested::Seq(accumulated)
}

fn collect<T: Clone>(items: &[Nested<T>], accumulated: &mut Vec<Nested<T>>) {
    each(items.into(), |element, _, _| match element {
        Nested::Seq(inner) => {
            collect(inner, accumulated);
            accumulated.push(Nested::Seq(Vec::new()));
        }
        Nested::Leaf(_) => accumulated.push(element.clone()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf(value: i32) -> Nested<i32> {
        Nested::Leaf(value)
    }

    fn seq(items: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::Seq(items)
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let input = seq(vec![
            leaf(1),
            seq(vec![leaf(2), seq(vec![leaf(3), seq(vec![leaf(4)])])]),
            leaf(5),
        ]);

        assert_eq!(
            flatten(&input),
            seq(vec![leaf(1), leaf(2), leaf(3), leaf(4), leaf(5)])
        );
    }

    #[test]
    fn test_flatten_leaf_is_identity() {
        assert_eq!(flatten(&leaf(9)), leaf(9));
    }

    #[test]
    fn test_flatten_drops_empty_nestings() {
        let input = seq(vec![seq(vec![]), leaf(1), seq(vec![seq(vec![])])]);

        assert_eq!(flatten(&input), seq(vec![leaf(1)]));
    }

    #[test]
    fn test_flatten_result_has_no_sequences() {
        let input = seq(vec![seq(vec![leaf(1), leaf(2)]), seq(vec![leaf(3)])]);

        match flatten(&input) {
            Nested::Seq(items) => assert!(items.iter().all(|item| !item.is_seq())),
            Nested::Leaf(_) => panic!("sequence input must flatten to a sequence"),
        }
    }

    fn arb_nested(depth: u32) -> impl Strategy<Value = Nested<i32>> {
        let leaf = any::<i32>().prop_map(Nested::Leaf);
        leaf.prop_recursive(depth, 64, 8, |inner| {
            proptest::collection::vec(inner, 0..8).prop_map(Nested::Seq)
        })
    }

    proptest! {
        #[test]
        fn prop_flatten_matches_leaf_traversal(input in arb_nested(4)) {
            let flat = flatten(&input);

            // flattening preserves the depth-first leaf order exactly
            prop_assert_eq!(flat.values(), input.values());

            if let Nested::Seq(items) = &flat {
                prop_assert!(items.iter().all(|item| !item.is_seq()));
            }
        }
    }
}
