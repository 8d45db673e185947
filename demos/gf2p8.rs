// Copyright 2024-2025 Irreducible Inc.

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gfni_field::{affine_byte, affine_inverse_byte, exp, gf2p8_mul, inverse, log};
use gfni_utils::tracing::init_tracing;
use gfni_vector::{
	execute, ArrayRegisterFile, Encoding, Gf2p8Instruction, Gf2p8Opcode, MaskingMode,
	OpmaskRegister, RegisterFile, VectorLength, VectorRegister, VectorRegisterId,
};

/// Evaluate the GFNI instructions on bytes and registers.
#[derive(Debug, Parser)]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Product of two bytes in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
	Mul {
		#[arg(value_parser = parse_u8)]
		a: u8,
		#[arg(value_parser = parse_u8)]
		b: u8,
	},
	/// Affine transformation of one byte by a qword matrix.
	Affine {
		#[arg(value_parser = parse_u64)]
		matrix: u64,
		#[arg(value_parser = parse_u8)]
		value: u8,
		#[arg(value_parser = parse_u8)]
		imm: u8,
	},
	/// Affine transformation of the multiplicative inverse of one byte.
	AffineInv {
		#[arg(value_parser = parse_u64)]
		matrix: u64,
		#[arg(value_parser = parse_u8)]
		value: u8,
		#[arg(value_parser = parse_u8)]
		imm: u8,
	},
	/// Print one of the field tables.
	Table {
		#[arg(value_enum)]
		table: Table,
	},
	/// Execute one instruction on a register file and print the destination register.
	Exec(Box<ExecArgs>),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Table {
	Inverse,
	Exp,
	Log,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Op {
	Mul,
	Affine,
	AffineInv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
	Legacy,
	Vex,
	Evex,
}

#[derive(Debug, clap::Args)]
struct ExecArgs {
	#[arg(value_enum)]
	op: Op,
	/// First source, a hex number of up to 512 bits. The legacy form also uses it as the
	/// destination's prior value.
	#[arg(value_parser = parse_register)]
	src1: VectorRegister,
	/// Second source: the multiplier or the matrices, as a hex number of up to 512 bits.
	#[arg(value_parser = parse_register)]
	src2: VectorRegister,
	/// Prior value of the destination register, zero when omitted. Not accepted by the legacy
	/// form, whose destination is the first source.
	#[arg(long, value_parser = parse_register)]
	dst: Option<VectorRegister>,
	/// Immediate of the affine forms.
	#[arg(long, default_value = "0", value_parser = parse_u8)]
	imm: u8,
	/// Active vector length in bits.
	#[arg(long, default_value_t = 128)]
	len: usize,
	#[arg(long, value_enum, default_value_t = EncodingArg::Vex)]
	encoding: EncodingArg,
	/// EVEX write mask, loaded into k1. Without it the instruction is unmasked (k0).
	#[arg(long, value_parser = parse_u64)]
	mask: Option<u64>,
	/// Zero unselected elements instead of merging.
	#[arg(long)]
	zeroing: bool,
}

fn strip_hex_prefix(text: &str) -> String {
	let digits = text
		.strip_prefix("0x")
		.or_else(|| text.strip_prefix("0X"))
		.unwrap_or(text);
	digits.replace('_', "")
}

fn parse_u8(text: &str) -> Result<u8> {
	u8::from_str_radix(&strip_hex_prefix(text), 16).with_context(|| format!("invalid byte {text}"))
}

fn parse_u64(text: &str) -> Result<u64> {
	u64::from_str_radix(&strip_hex_prefix(text), 16)
		.with_context(|| format!("invalid qword {text}"))
}

/// Parses a hex number, most significant digit first, into a register.
fn parse_register(text: &str) -> Result<VectorRegister> {
	let mut digits = strip_hex_prefix(text);
	ensure!(!digits.is_empty(), "empty register literal");
	if digits.len() % 2 == 1 {
		digits.insert(0, '0');
	}

	let mut bytes = (0..digits.len())
		.step_by(2)
		.map(|start| {
			u8::from_str_radix(&digits[start..start + 2], 16)
				.with_context(|| format!("invalid register literal {text}"))
		})
		.collect::<Result<Vec<_>>>()?;
	bytes.reverse();

	Ok(VectorRegister::from_low_bytes(&bytes)?)
}

fn print_table(table: Table) {
	let entries = (0..=255u8).map(|index| match table {
		Table::Inverse => inverse(index),
		Table::Exp => exp(index as usize),
		Table::Log => log(index),
	});
	let rows = entries.collect::<Vec<_>>();
	for (row, chunk) in rows.chunks(16).enumerate() {
		let line = chunk
			.iter()
			.map(|entry| format!("{entry:02x}"))
			.collect::<Vec<_>>()
			.join(" ");
		println!("{:02x}: {line}", row * 16);
	}
}

/// Seeds a register file from the arguments and builds the instruction, writing `zmm0` from
/// `zmm1` and `zmm2`.
fn prepare(args: &ExecArgs) -> Result<(ArrayRegisterFile, Gf2p8Instruction)> {
	let opcode = match args.op {
		Op::Mul => Gf2p8Opcode::MulB,
		Op::Affine => Gf2p8Opcode::AffineQb { imm8: args.imm },
		Op::AffineInv => Gf2p8Opcode::AffineInvQb { imm8: args.imm },
	};
	let len = VectorLength::from_bits(args.len)?;

	let dst = VectorRegisterId::new(0)?;
	let src1 = VectorRegisterId::new(1)?;
	let src2 = VectorRegisterId::new(2)?;

	let mut regs = ArrayRegisterFile::default();
	regs.set_vector(src2, args.src2);

	let instruction = match args.encoding {
		EncodingArg::Legacy => {
			ensure!(args.mask.is_none(), "the legacy encoding has no write mask");
			ensure!(!args.zeroing, "the legacy encoding has no zeroing bit");
			ensure!(args.dst.is_none(), "the legacy destination is the first source, drop --dst");
			regs.set_vector(dst, args.src1);
			Gf2p8Instruction::new(opcode, Encoding::Legacy, len, dst, dst, src2)?
		}
		EncodingArg::Vex => {
			ensure!(args.mask.is_none(), "the VEX encoding has no write mask");
			ensure!(!args.zeroing, "the VEX encoding has no zeroing bit");
			regs.set_vector(dst, args.dst.unwrap_or_default());
			regs.set_vector(src1, args.src1);
			Gf2p8Instruction::vex(opcode, len, dst, src1, src2)?
		}
		EncodingArg::Evex => {
			regs.set_vector(dst, args.dst.unwrap_or_default());
			regs.set_vector(src1, args.src1);

			let opmask = match args.mask {
				Some(bits) => {
					let k1 = OpmaskRegister::new(1)?;
					regs.set_opmask(k1, bits);
					k1
				}
				None => OpmaskRegister::K0,
			};
			let masking = if args.zeroing {
				MaskingMode::Zero
			} else {
				MaskingMode::Merge
			};
			Gf2p8Instruction::evex(opcode, len, dst, src1, src2, opmask, masking)?
		}
	};

	Ok((regs, instruction))
}

fn exec(args: ExecArgs) -> Result<()> {
	let (mut regs, instruction) = prepare(&args)?;

	tracing::debug!(?instruction, "executing");
	execute(&instruction, &mut regs);
	println!("{:?}", regs.vector(instruction.dst()));

	Ok(())
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	match args.command {
		Command::Mul { a, b } => println!("{:#04x}", gf2p8_mul(a, b)),
		Command::Affine { matrix, value, imm } => {
			println!("{:#04x}", affine_byte(matrix, value, imm))
		}
		Command::AffineInv { matrix, value, imm } => {
			println!("{:#04x}", affine_inverse_byte(matrix, value, imm))
		}
		Command::Table { table } => print_table(table),
		Command::Exec(args) => exec(*args)?,
	}

	Ok(())
}
