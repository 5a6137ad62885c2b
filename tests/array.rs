use enumerate::*;
use std::ffi::CString;

#[test]
fn fixed_array_by_value_and_reference() {
    let a = [10, 20, 30];
    let by_ref: Vec<_> = enumerate(&a).into_iter().map(|i| (i.index, *i.value)).collect();
    assert_eq!(by_ref, [(0, 10), (1, 20), (2, 30)]);

    let e = enumerate(a);
    assert_eq!(e.category(), Category::FixedArray);
    let by_value: Vec<_> = e.into_iter().map(Indexed::into_pair).collect();
    assert_eq!(by_value, [(0, 10), (1, 20), (2, 30)]);
}

#[test]
fn fixed_array_mutation() {
    let mut a = [1.0f32; 4];
    for item in enumerate(&mut a) {
        *item.value += item.index as f32;
    }
    assert_eq!(a, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn fixed_array_with_bound() {
    let a = ['w', 'x', 'y', 'z'];
    let e = enumerate_with(&a, 2u8);
    assert_eq!(e.category(), Category::FixedArray);
    assert_eq!(e.limit(), Some(2));
    assert_eq!(e.into_iter().map(|i| *i.value).collect::<String>(), "wx");
}

#[test]
fn variadic_pack_is_an_array() {
    let e = enumerate!(0, 10, 20, 30, 40);
    assert_eq!(e.category(), Category::VariadicArray);
    let out: Vec<_> = e.into_iter().map(Indexed::into_pair).collect();
    assert_eq!(out, [(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
}

#[test]
fn variadic_pack_of_references() {
    let (mut a, mut b) = (1, 2);
    for item in enumerate!(&mut a, &mut b) {
        *item.value *= 10;
    }
    assert_eq!((a, b), (10, 20));
}

#[test]
fn variadic_pack_forms() {
    let single = enumerate!(AsArray, "only");
    assert_eq!(single.into_iter().count(), 1);

    let wide = enumerate!(as i16; 'a', 'b', 'c');
    let last = wide.into_iter().last().map(Indexed::into_pair);
    assert_eq!(last, Some((2i16, 'c')));

    let explicit = enumerate!(as u64; AsArray, 5, 6,);
    assert_eq!(explicit.into_iter().map(|i| i.index).collect::<Vec<_>>(), [0u64, 1]);
}

#[test]
fn macro_forwards_single_sources() {
    let v = vec![7, 8];
    let e = enumerate!(&v);
    assert_eq!(e.category(), Category::Container);
    assert_eq!(e.into_iter().count(), 2);
}

#[test]
fn c_string_stops_at_terminator() {
    let e = enumerate(c"01234");
    assert_eq!(e.category(), Category::NullTerminatedString);
    let mut count = 0;
    for item in e {
        assert_eq!(*item.value, b'0' + item.index as u8);
        count += 1;
    }
    assert_eq!(count, 5);
}

#[test]
fn owned_c_string_borrowed() {
    let s = CString::new("hey").unwrap();
    let chars: Vec<char> = enumerate(s.as_c_str())
        .into_iter()
        .map(|i| char::from(*i.value))
        .collect();
    assert_eq!(chars, ['h', 'e', 'y']);
}

#[test]
fn raw_character_pointers() {
    let wide: Vec<u32> = "wide\0tail".chars().map(u32::from).collect();
    let n = unsafe { enumerate_raw(wide.as_ptr()) }.into_iter().count();
    assert_eq!(n, 4);

    let text: Vec<char> = "ab\0".chars().collect();
    let e = unsafe { enumerate_raw_as::<u8, _, _>(text.as_ptr()) };
    assert_eq!(e.category(), Category::NullTerminatedString);
    let out: Vec<_> = e.into_iter().map(|i| (i.index, *i.value)).collect();
    assert_eq!(out, [(0u8, 'a'), (1, 'b')]);

    let none = unsafe { enumerate_raw(std::ptr::null::<u8>()) };
    assert_eq!(none.into_iter().count(), 0);
}

#[test]
fn pointer_pair() {
    let v = [3usize, 1, 4, 1, 5];
    let range = v.as_ptr_range();
    let e = unsafe { enumerate_raw_with(range.start, range.end) };
    assert_eq!(e.category(), Category::IteratorPointerPair);
    let sum: usize = e.into_iter().map(|i| i.index * *i.value).sum();
    assert_eq!(sum, 1 + 8 + 3 + 20);
}

#[test]
fn mutable_pointer_pair() {
    let mut v = vec![0u8; 4];
    let range = v.as_mut_ptr_range();
    for item in unsafe { enumerate_raw_with(range.start, range.end) } {
        *item.value = item.index as u8 + 1;
    }
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn empty_pointer_pair() {
    let v: [u16; 0] = [];
    let range = v.as_ptr_range();
    let e = unsafe { enumerate_raw_with(range.start, range.end) };
    assert_eq!(e.into_iter().count(), 0);
}

#[test]
fn pointer_with_count() {
    let v = [9, 8, 7, 6];
    let e = unsafe { enumerate_raw_with(v.as_ptr(), 3usize) };
    assert_eq!(e.category(), Category::PointerWithSize);
    let out: Vec<_> = e.into_iter().map(|i| *i.value).collect();
    assert_eq!(out, [9, 8, 7]);

    let zero = unsafe { enumerate_raw_with(std::ptr::null::<i32>(), 0usize) };
    assert_eq!(zero.into_iter().count(), 0);
}

#[test]
fn mutable_pointer_with_count() {
    let mut v = [1, 1, 1];
    let e = unsafe { enumerate_raw_as_with::<i32, _, _, _>(v.as_mut_ptr(), 2u8) };
    for item in e {
        *item.value += item.index;
    }
    assert_eq!(v, [1, 2, 1]);
}

#[test]
fn checked_pointer_forms() {
    let v = [1u8, 2, 3];
    let range = v.as_ptr_range();
    assert_eq!(
        unsafe { try_enumerate_raw_with(range.end, range.start) }.err(),
        Some(Error::InvertedRange { excess: 3 })
    );
    assert_eq!(
        unsafe { try_enumerate_raw_with(v.as_ptr(), -2i8) }.err(),
        Some(Error::NegativeBound { bound: -2 })
    );
    let ok = unsafe { try_enumerate_raw_with(range.start, range.end) };
    assert_eq!(ok.map(|e| e.into_iter().count()), Ok(3));
}
