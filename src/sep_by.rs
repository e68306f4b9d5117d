use crate::accumulator::SequenceCollect;
use crate::block::{Bindings, Block, block};
use crate::lift::lift_vector;
use crate::many::ManyExt;
use crate::parser::Parser;
use crate::tag::TagExt;
use crate::then::ThenExt;
use std::sync::Arc;

/// Item list produced by [`sep_by`] and [`end_by`]
pub type ItemList<P> =
    Block<<P as Parser>::Element, Vec<<P as Parser>::Output>, Vec<<P as Parser>::Output>>;

fn join_items<O>(mut bindings: Bindings<Vec<O>>) -> Vec<O> {
    let mut items = bindings.take("first");
    items.extend(bindings.take("rest"));
    items
}

/// Creates a parser that matches one or more items separated by `separator`
///
/// Separators are discarded. A trailing separator is not consumed: `"1,2,"`
/// yields `[1, 2]` and leaves the cursor on the final `,`.
pub fn sep_by<P, S>(parser: P, separator: S) -> ItemList<P>
where
    P: Parser + Send + Sync + 'static,
    P::Output: 'static,
    S: Parser<Element = P::Element> + Send + Sync + 'static,
{
    let item = Arc::new(parser);

    block()
        .step(lift_vector(Arc::clone(&item)).tag("first"))
        .step(
            separator
                .then(item)
                .many_into::<SequenceCollect<P::Output>>(0, 0)
                .tag("rest"),
        )
        .build(join_items)
}

/// Creates a parser that matches one or more items, each followed by `separator`
///
/// Unlike [`sep_by`] the separator after the last item is required and consumed.
pub fn end_by<P, S>(parser: P, separator: S) -> ItemList<P>
where
    P: Parser + Send + Sync + 'static,
    P::Output: 'static,
    S: Parser<Element = P::Element> + Send + Sync + 'static,
{
    let item = Arc::new(parser);
    let separator = Arc::new(separator);

    block()
        .step(lift_vector(Arc::clone(&item)).tag("first"))
        .step(
            Arc::clone(&separator)
                .then(item)
                .many_into::<SequenceCollect<P::Output>>(0, 0)
                .tag("rest"),
        )
        .skip(separator)
        .build(join_items)
}
