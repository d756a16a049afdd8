//! Bytecode listing for the `dump` CLI mode.

use crate::chunk::Chunk;
use crate::opcode::OpCode;
use crate::value::{FunctionObj, Heap, Obj, Value};

/// Prints `fun`'s chunk, then every function nested in its constant pool.
pub fn disassemble_function(heap: &Heap, fun: &FunctionObj) {
    disassemble_chunk(heap, &fun.chunk, fun.name.as_deref().unwrap_or("<script>"));
    for c in &fun.chunk.constants {
        if let Value::Obj(r) = c {
            if let Obj::Function(nested) = &heap.objects[*r] {
                println!();
                disassemble_function(heap, nested);
            }
        }
    }
}

pub fn disassemble_chunk(heap: &Heap, chunk: &Chunk, name: &str) {
    println!("== {} ==", name);
    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(heap, chunk, offset);
    }
}

pub fn disassemble_instruction(heap: &Heap, chunk: &Chunk, offset: usize) -> usize {
    print!("{:04} ", offset);
    if offset > 0 && chunk.lines[offset] == chunk.lines[offset - 1] {
        print!("   | ");
    } else {
        print!("{:4} ", chunk.lines[offset]);
    }

    let instruction = OpCode::from_u8(chunk.code[offset]);
    match instruction {
        OpCode::Constant => constant_instruction("Constant", heap, chunk, offset),
        OpCode::Nil => simple_instruction("Nil", offset),
        OpCode::True => simple_instruction("True", offset),
        OpCode::False => simple_instruction("False", offset),
        OpCode::Pop => simple_instruction("Pop", offset),
        OpCode::GetLocal => byte_instruction("GetLocal", chunk, offset),
        OpCode::SetLocal => byte_instruction("SetLocal", chunk, offset),
        OpCode::GetGlobal => constant_instruction("GetGlobal", heap, chunk, offset),
        OpCode::DefineGlobal => constant_instruction("DefineGlobal", heap, chunk, offset),
        OpCode::SetGlobal => constant_instruction("SetGlobal", heap, chunk, offset),
        OpCode::Equal => simple_instruction("Equal", offset),
        OpCode::Greater => simple_instruction("Greater", offset),
        OpCode::Less => simple_instruction("Less", offset),
        OpCode::Add => simple_instruction("Add", offset),
        OpCode::Sub => simple_instruction("Sub", offset),
        OpCode::Mul => simple_instruction("Mul", offset),
        OpCode::Div => simple_instruction("Div", offset),
        OpCode::Not => simple_instruction("Not", offset),
        OpCode::Negate => simple_instruction("Negate", offset),
        OpCode::Print => simple_instruction("Print", offset),
        OpCode::Jump => jump_instruction("Jump", 1, chunk, offset),
        OpCode::JumpIfFalse => jump_instruction("JumpIfFalse", 1, chunk, offset),
        OpCode::Loop => jump_instruction("Loop", -1, chunk, offset),
        OpCode::Call => byte_instruction("Call", chunk, offset),
        OpCode::Return => simple_instruction("Return", offset),
    }
}

fn simple_instruction(name: &str, offset: usize) -> usize {
    println!("{}", name);
    offset + 1
}

fn byte_instruction(name: &str, chunk: &Chunk, offset: usize) -> usize {
    let slot = chunk.code[offset + 1];
    println!("{:-16} {:4}", name, slot);
    offset + 2
}

fn constant_instruction(name: &str, heap: &Heap, chunk: &Chunk, offset: usize) -> usize {
    let idx = chunk.code[offset + 1] as usize;
    print!("{:-16} {:4} '", name, idx);
    match chunk.constants.get(idx) {
        Some(v) => print!("{}", heap.value_to_string(*v)),
        None => print!("INVALID"),
    }
    println!("'");
    offset + 2
}

fn jump_instruction(name: &str, sign: i32, chunk: &Chunk, offset: usize) -> usize {
    let jump = Chunk::read_u16(&chunk.code, offset + 1) as i32;
    println!("{:-16} {:4} -> {}", name, offset, offset as i32 + 3 + sign * jump);
    offset + 3
}
