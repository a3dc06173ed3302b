use nibble_core::Word;
use nibble_core::vm::{Instruction, Line, Program, run};
use postcard::{from_bytes, to_allocvec};
use std::ops::Deref;

#[test]
fn test_postcard() {
    let program = Program::load(vec![
        Instruction::Push(Word::MAX),
        Instruction::PrintHead,
        Instruction::print("hi"),
        Instruction::Jump(Line(5)),
        Instruction::Stop,
    ])
    .unwrap();

    // Variant index, then operands. Words are a single byte, addresses are
    // 0-based.
    let v = to_allocvec(&program).unwrap();
    assert_eq!(&[5, 0, 15, 11, 12, 2, 104, 105, 8, 4, 10], v.deref());

    let deserialized: Program = from_bytes(&v).unwrap();
    assert_eq!(deserialized, program);
    assert_eq!(run(&deserialized), run(&program));
    println!("✓ Program round-trip");

    // Addresses are bounds-checked on the way in.
    assert!(from_bytes::<Program>(&[1, 8, 1]).is_err());
    println!("✓ Dangling jump rejected");

    // So are words.
    assert!(from_bytes::<Program>(&[1, 0, 16]).is_err());
    println!("✓ Oversized word rejected");
}
