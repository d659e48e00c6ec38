//! Menu-driven sparse matrix calculator
//!
//! Thin console front-end over the `spmat-core` facade: it prompts, parses
//! numbers, dispatches to the public contract, and prints rendered results.
//! Core failures are reported and the loop continues.

use clap::{Parser, Subcommand};
use spmat::{render_dense, render_sparse, SparseMatrix};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about = "Sparse matrix calculator - interactive menu over an exact-zero-eliminating sparse matrix engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted walkthrough non-interactively
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(),
        None => run_menu(),
    }
}

/// Interactive menu loop over a workspace of matrices
fn run_menu() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut matrices: Vec<SparseMatrix> = Vec::new();

    loop {
        print_menu();
        let Some(line) = read_line(&mut lines, "Enter your choice: ") else {
            break;
        };
        let Ok(choice) = line.parse::<usize>() else {
            println!("Invalid choice. Please try again.");
            continue;
        };

        let outcome = match choice {
            1 => create_matrix(&mut lines, &mut matrices),
            2 => binary_op(&mut lines, &mut matrices, "addition", SparseMatrix::add),
            3 => binary_op(
                &mut lines,
                &mut matrices,
                "subtraction",
                SparseMatrix::subtract,
            ),
            4 => scalar_op(&mut lines, &mut matrices, SparseMatrix::scalar_multiply),
            5 => binary_op(
                &mut lines,
                &mut matrices,
                "multiplication",
                SparseMatrix::multiply,
            ),
            6 => scalar_op(&mut lines, &mut matrices, SparseMatrix::scalar_divide),
            7 => unary_op(&mut lines, &mut matrices, SparseMatrix::transpose),
            8 => show_determinant(&mut lines, &matrices),
            9 => unary_op(&mut lines, &mut matrices, SparseMatrix::inverse),
            10 => view_matrix(&mut lines, &matrices, render_dense),
            11 => view_matrix(&mut lines, &matrices, render_sparse),
            0 => {
                println!("Exiting.");
                break;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("Error: {err}");
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("=== SPARSE MATRIX CALCULATOR ===");
    println!("1. Create a new matrix");
    println!("2. Add two matrices");
    println!("3. Subtract two matrices");
    println!("4. Multiply by scalar");
    println!("5. Multiply two matrices");
    println!("6. Divide by scalar");
    println!("7. Transpose a matrix");
    println!("8. Calculate determinant");
    println!("9. Calculate inverse");
    println!("10. View matrix");
    println!("11. View sparse representation");
    println!("0. Exit");
}

type LineReader<'a> = std::io::Lines<io::StdinLock<'a>>;

/// Prompt and read one line; `None` on end of input
fn read_line(lines: &mut LineReader<'_>, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn prompt_usize(lines: &mut LineReader<'_>, prompt: &str) -> Option<usize> {
    let line = read_line(lines, prompt)?;
    match line.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("Not a valid number: {line}");
            None
        }
    }
}

fn prompt_f64(lines: &mut LineReader<'_>, prompt: &str) -> Option<f64> {
    let line = read_line(lines, prompt)?;
    match line.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("Not a valid number: {line}");
            None
        }
    }
}

/// Prompt for the index of an existing matrix
fn select_index(lines: &mut LineReader<'_>, matrices: &[SparseMatrix], what: &str) -> Option<usize> {
    if matrices.is_empty() {
        println!("No matrices available. Create a matrix first.");
        return None;
    }
    let prompt = format!("Enter index of {what} (0-{}): ", matrices.len() - 1);
    let idx = prompt_usize(lines, &prompt)?;
    if idx >= matrices.len() {
        println!("Invalid matrix index.");
        return None;
    }
    Some(idx)
}

fn store_result(matrices: &mut Vec<SparseMatrix>, result: SparseMatrix) {
    println!("Result stored as matrix {}", matrices.len());
    println!("{}", render_dense(&result));
    matrices.push(result);
}

fn create_matrix(
    lines: &mut LineReader<'_>,
    matrices: &mut Vec<SparseMatrix>,
) -> spmat::Result<()> {
    let Some(rows) = prompt_usize(lines, "Enter number of rows: ") else {
        return Ok(());
    };
    let Some(cols) = prompt_usize(lines, "Enter number of columns: ") else {
        return Ok(());
    };

    let mut matrix = SparseMatrix::new(rows, cols)?;
    println!("Enter matrix elements row by row:");
    for row in 0..rows {
        for col in 0..cols {
            let prompt = format!("Element at position ({row}, {col}): ");
            let Some(value) = prompt_f64(lines, &prompt) else {
                return Ok(());
            };
            matrix.insert(row, col, value)?;
        }
    }

    println!("Matrix {} created successfully.", matrices.len());
    matrices.push(matrix);
    Ok(())
}

fn binary_op(
    lines: &mut LineReader<'_>,
    matrices: &mut Vec<SparseMatrix>,
    what: &str,
    op: fn(&SparseMatrix, &SparseMatrix) -> spmat::Result<SparseMatrix>,
) -> spmat::Result<()> {
    if matrices.len() < 2 {
        println!("You need at least two matrices for {what}. Create more matrices.");
        return Ok(());
    }
    let Some(first) = select_index(lines, matrices, "first matrix") else {
        return Ok(());
    };
    let Some(second) = select_index(lines, matrices, "second matrix") else {
        return Ok(());
    };

    let result = op(&matrices[first], &matrices[second])?;
    store_result(matrices, result);
    Ok(())
}

fn scalar_op(
    lines: &mut LineReader<'_>,
    matrices: &mut Vec<SparseMatrix>,
    op: fn(&SparseMatrix, f64) -> spmat::Result<SparseMatrix>,
) -> spmat::Result<()> {
    let Some(idx) = select_index(lines, matrices, "matrix") else {
        return Ok(());
    };
    let Some(scalar) = prompt_f64(lines, "Enter scalar value: ") else {
        return Ok(());
    };

    let result = op(&matrices[idx], scalar)?;
    store_result(matrices, result);
    Ok(())
}

fn unary_op(
    lines: &mut LineReader<'_>,
    matrices: &mut Vec<SparseMatrix>,
    op: fn(&SparseMatrix) -> spmat::Result<SparseMatrix>,
) -> spmat::Result<()> {
    let Some(idx) = select_index(lines, matrices, "matrix") else {
        return Ok(());
    };

    let result = op(&matrices[idx])?;
    store_result(matrices, result);
    Ok(())
}

fn show_determinant(lines: &mut LineReader<'_>, matrices: &[SparseMatrix]) -> spmat::Result<()> {
    let Some(idx) = select_index(lines, matrices, "matrix") else {
        return Ok(());
    };

    let det = matrices[idx].determinant()?;
    println!("Determinant: {det}");
    Ok(())
}

fn view_matrix(
    lines: &mut LineReader<'_>,
    matrices: &[SparseMatrix],
    render: fn(&SparseMatrix) -> String,
) -> spmat::Result<()> {
    let Some(idx) = select_index(lines, matrices, "matrix") else {
        return Ok(());
    };

    let m = &matrices[idx];
    println!("Matrix {}x{}:", m.rows(), m.cols());
    print!("{}", render(m));
    Ok(())
}

/// Scripted walkthrough over two fixed 2x2 matrices
fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let m1 = SparseMatrix::from_triplets(
        2,
        2,
        &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)],
    )?;
    let m2 = SparseMatrix::from_triplets(
        2,
        2,
        &[(0, 0, 5.0), (0, 1, 6.0), (1, 0, 7.0), (1, 1, 8.0)],
    )?;

    println!("Matrix 1:\n{}", render_dense(&m1));
    println!("Matrix 2:\n{}", render_dense(&m2));

    println!("M1 + M2:\n{}", render_dense(&m1.add(&m2)?));
    println!("M1 - M2:\n{}", render_dense(&m1.subtract(&m2)?));
    println!("M1 * 2.5:\n{}", render_dense(&m1.scalar_multiply(2.5)?));
    println!("M1 * M2:\n{}", render_dense(&m1.multiply(&m2)?));
    println!("Transpose of M1:\n{}", render_dense(&m1.transpose()?));
    println!("Determinant of M1: {}\n", m1.determinant()?);

    let inv = m1.inverse()?;
    println!("Inverse of M1:\n{}", render_dense(&inv));
    println!("Verification M1 * M1^-1:\n{}", render_dense(&m1.multiply(&inv)?));

    let sparse = SparseMatrix::from_triplets(3, 3, &[(0, 0, 1.0), (0, 2, 3.0), (2, 1, 7.0)])?;
    println!("Sparse 3x3:\n{}", render_dense(&sparse));
    println!("Sparse representation:\n{}", render_sparse(&sparse));

    Ok(())
}
