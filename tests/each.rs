use enumerate::*;
use std::fmt::Debug;

/// Records every visited field as `index:value`.
#[derive(Default)]
struct Render(Vec<String>);

impl<I: Debug, T: Debug + ?Sized> Visitor<I, T> for Render {
    fn visit(&mut self, index: I, value: &T) {
        self.0.push(format!("{index:?}:{value:?}"));
    }
}

/// Resets every visited field to its default.
struct Reset(usize);

impl<I, T: Default> VisitorMut<I, T> for Reset {
    fn visit_mut(&mut self, _: I, value: &mut T) {
        *value = T::default();
        self.0 += 1;
    }
}

#[test]
fn heterogeneous_tuple() {
    let t = (1u8, "two", 3.5f64, 'c');
    let e = enumerate(&t);
    assert_eq!(e.category(), Category::TupleLike);
    assert_eq!(e.arity(), 4);
    let Render(out) = e.each(Render::default());
    assert_eq!(out, ["0:1", "1:\"two\"", "2:3.5", "3:'c'"]);
}

#[test]
fn homogeneous_tuple_with_closure() {
    let mut order = Vec::new();
    enumerate((5, 6, 7)).each(|index: usize, value: &i32| order.push((index, *value)));
    assert_eq!(order, [(0, 5), (1, 6), (2, 7)]);
}

#[test]
fn tuple_mutation_through_mutable_borrow() {
    let mut t = (String::from("keep"), 9u32, vec![1]);
    let Reset(count) = enumerate(&mut t).each_mut(Reset(0));
    assert_eq!(count, 3);
    assert_eq!(t, (String::new(), 0, vec![]));
}

#[test]
fn tuple_bound() {
    let t = (1, 2, 3, 4, 5);
    let e = enumerate_with(&t, 2usize);
    assert_eq!((e.len(), e.limit()), (2, Some(2)));
    let Render(out) = e.each(Render::default());
    assert_eq!(out, ["0:1", "1:2"]);

    let wide = enumerate_with((1, 2), 9usize);
    assert_eq!(wide.len(), 2);
    let zero = enumerate_with((1, 2), 0usize);
    assert!(zero.is_empty());
    let Render(none) = zero.each(Render::default());
    assert!(none.is_empty());
}

#[test]
fn owned_tuple_round_trips() {
    let mut e = enumerate((1, 2));
    e.each_mut(|index: usize, value: &mut i32| *value += index as i32);
    assert_eq!(e.into_inner(), (1, 3));
}

#[test]
fn tuple_index_type() {
    let Render(out) = enumerate_as::<i8, _, _>(("a", "b")).each(Render::default());
    assert_eq!(out, ["0:\"a\"", "1:\"b\""]);

    let mut seen = Vec::new();
    enumerate(('x', 'y'))
        .index_as::<u16>()
        .each(|index: u16, value: &char| seen.push((index, *value)));
    assert_eq!(seen, [(0u16, 'x'), (1, 'y')]);
}

#[test]
fn variadic_tuple() {
    let e = enumerate!(AsTuple, 1, "mixed", [0u8; 2]);
    assert_eq!(e.category(), Category::VariadicTuple);
    let Render(out) = e.each(Render::default());
    assert_eq!(out, ["0:1", "1:\"mixed\"", "2:[0, 0]"]);
}

#[aggregate]
#[derive(Debug, PartialEq, Default)]
struct Config {
    name: String,
    retries: u32,
    verbose: bool,
}

#[aggregate]
struct Pair<T>(T, T);

#[aggregate]
struct Borrowed<'a> {
    label: &'a str,
    weight: f32,
}

#[aggregate]
struct Unit;

#[test]
fn aggregate_struct_fields_in_order() {
    let c = Config {
        name: "db".into(),
        retries: 3,
        verbose: true,
    };
    let e = enumerate(&c);
    assert_eq!(e.category(), Category::AggregateStruct);
    assert_eq!(e.arity(), 3);
    let Render(out) = e.each(Render::default());
    assert_eq!(out, ["0:\"db\"", "1:3", "2:true"]);
}

#[test]
fn aggregate_struct_mutation() {
    let mut c = Config {
        name: "db".into(),
        retries: 3,
        verbose: true,
    };
    let Reset(count) = enumerate_with(&mut c, 2usize).each_mut(Reset(0));
    assert_eq!(count, 2);
    assert_eq!(
        c,
        Config {
            name: String::new(),
            retries: 0,
            verbose: true
        }
    );
}

#[test]
fn generic_and_borrowing_aggregates() {
    let mut p = Pair(1.5f64, 2.5);
    enumerate(&mut p).each_mut(|index: usize, value: &mut f64| *value *= index as f64);
    assert_eq!((p.0, p.1), (0.0, 2.5));

    let text = String::from("crate");
    let b = Borrowed {
        label: &text,
        weight: 0.5,
    };
    let Render(out) = enumerate(b).each(Render::default());
    assert_eq!(out, ["0:\"crate\"", "1:0.5"]);
}

#[test]
fn unit_aggregate_is_empty() {
    let e = enumerate(Unit);
    assert_eq!(e.arity(), 0);
    let Render(out) = e.each(Render::default());
    assert!(out.is_empty());
}

mod reexported {
    pub use ::enumerate as inner;
}

#[aggregate(krate = reexported::inner)]
struct ThroughReexport {
    a: u8,
    b: u8,
}

#[test]
fn krate_option() {
    let mut total = 0;
    enumerate(ThroughReexport { a: 4, b: 5 }).each(|index: usize, value: &u8| total += index * *value as usize);
    assert_eq!(total, 5);
}

#[test]
fn checked_tuple_index_type() {
    assert!(try_enumerate_as_with::<u8, _, _, _>((1, 2), 1usize).is_ok());
    assert_eq!(
        try_enumerate_with((1, 2), -4i16).err().map(|e| e.to_string()),
        Some("enumerate bound -4 is negative".to_string())
    );
}
