use crate::error::Error;
use crate::eval::{self, Assignment, Step};
use crate::expr::Expr;
use crate::lexer::Conversion;

/// One line of a truth table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The input values, aligned with the table's variable list
    pub inputs: Vec<bool>,
    /// Every intermediate reduction for this input combination
    pub steps: Vec<Step>,
    /// The value of the whole expression
    pub result: bool,
}

/// A truth table for a boolean expression.
///
/// Construction detects which variables actually occur and enumerates all
/// `2^n` input combinations; evaluation is deferred to
/// [`rows`](#method.rows) or [`render`](#method.render). The table borrows
/// its expression, which stays immutable underneath it.
///
/// # Examples
/// ```
/// use veritable::{Expr, TruthTable};
///
/// let expr = Expr::new("A OR B OR C");
/// let table = TruthTable::new(&expr);
/// assert_eq!(table.variables(), ['A', 'B', 'C']);
/// assert_eq!(table.assignments().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable<'a> {
    expression: &'a Expr,
    variables: Vec<char>,
    assignments: Vec<Assignment>,
}

impl<'a> TruthTable<'a> {
    /// Build the table scaffolding for `expression`: detect its variables
    /// and enumerate every input combination.
    pub fn new(expression: &'a Expr) -> Self {
        let variables = expression.variables();
        let assignments = enumerate(&variables);
        TruthTable {
            expression,
            variables,
            assignments,
        }
    }

    /// The expression this table is for
    pub fn expression(&self) -> &Expr {
        self.expression
    }

    /// The detected variables, sorted `A < B < C`
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// All enumerated input combinations, in binary counting order. An
    /// expression with no variables still has exactly one (empty)
    /// assignment.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Evaluate every assignment and collect the table body.
    ///
    /// Fails on the first assignment whose evaluation fails; with a
    /// well-formed expression this cannot happen, since every row shares
    /// the same postfix sequence.
    pub fn rows(&self) -> Result<Vec<Row>, Error> {
        let Conversion { postfix, .. } = self.expression.to_postfix();
        self.assignments
            .iter()
            .map(|assignment| {
                let evaluation = eval::evaluate(&postfix, assignment)?;
                let inputs = self
                    .variables
                    .iter()
                    .map(|variable| assignment.get(variable).copied().unwrap_or(false))
                    .collect();
                Ok(Row {
                    inputs,
                    steps: evaluation.steps,
                    result: evaluation.result,
                })
            })
            .collect()
    }

    /// Render the table as fixed-width text: one 5-wide column per
    /// variable, one 20-wide column per intermediate step, booleans
    /// printed as `0`/`1`. Step labels for the header come from the first
    /// row; evaluation is pure, so every row has the same columns.
    pub fn render(&self) -> Result<String, Error> {
        let rows = self.rows()?;
        let mut out = String::new();

        if let Some(first) = rows.first() {
            for variable in &self.variables {
                out.push_str(&format!("|{:<5}", variable));
            }
            out.push('|');
            for step in &first.steps {
                out.push_str(&format!("{:<20}|", step.label));
            }
            out.push('\n');

            for _ in &self.variables {
                out.push_str("|-----");
            }
            out.push('|');
            for _ in &first.steps {
                out.push_str("--------------------|");
            }
            out.push('\n');
        }

        for row in &rows {
            for value in &row.inputs {
                out.push_str(&format!("|{:<5}", u8::from(*value)));
            }
            out.push('|');
            for step in &row.steps {
                out.push_str(&format!("{:<20}|", u8::from(step.value)));
            }
            out.push('\n');
        }

        Ok(out)
    }
}

/// All `2^n` assignments over `variables`: row index `i` read as an n-bit
/// number, most significant bit first, maps onto the variables left to
/// right.
fn enumerate(variables: &[char]) -> Vec<Assignment> {
    let n = variables.len();
    let total = 1_usize << n;
    let mut assignments = Vec::with_capacity(total);

    for i in 0..total {
        let mut row = Assignment::new();
        for (j, &variable) in variables.iter().enumerate() {
            let value = (i >> (n - j - 1)) & 1 == 1;
            row.insert(variable, value);
        }
        assignments.push(row);
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_rows_for_three_variables() {
        let expr = Expr::new("A OR B OR C");
        let table = TruthTable::new(&expr);
        assert_eq!(table.assignments().len(), 8);
        assert_eq!(table.rows().unwrap().len(), 8);
    }

    #[test]
    fn msb_first_bit_order() {
        let expr = Expr::new("A OR B OR C");
        let table = TruthTable::new(&expr);

        // index 5 is 101 in binary: A=1, B=0, C=1
        let assignment = &table.assignments()[5];
        assert_eq!(assignment[&'A'], true);
        assert_eq!(assignment[&'B'], false);
        assert_eq!(assignment[&'C'], true);

        let row = &table.rows().unwrap()[5];
        assert_eq!(row.inputs, vec![true, false, true]);
    }

    #[test]
    fn no_variables_still_yields_one_assignment() {
        let expr = Expr::new("");
        let table = TruthTable::new(&expr);
        assert_eq!(table.assignments().len(), 1);
        assert!(table.assignments()[0].is_empty());

        // but there is nothing to evaluate
        assert!(matches!(
            table.rows(),
            Err(Error::MalformedExpression(_))
        ));
    }

    #[test]
    fn rows_carry_steps_and_result() {
        let expr = Expr::new("(A AND B) XOR NOT C");
        let table = TruthTable::new(&expr);
        let rows = table.rows().unwrap();

        // last row: A=1, B=1, C=1
        let row = &rows[7];
        assert_eq!(row.inputs, vec![true, true, true]);
        assert_eq!(
            row.steps.iter().map(|step| step.value).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert_eq!(row.result, true);
    }

    #[test]
    fn step_columns_are_stable_across_rows() {
        let expr = Expr::new("(A AND B) XOR NOT C");
        let table = TruthTable::new(&expr);
        let rows = table.rows().unwrap();

        let labels: Vec<&str> = rows[0]
            .steps
            .iter()
            .map(|step| step.label.as_str())
            .collect();
        for row in &rows {
            let row_labels: Vec<&str> =
                row.steps.iter().map(|step| step.label.as_str()).collect();
            assert_eq!(row_labels, labels);
        }
    }

    #[test]
    fn render_layout() {
        let expr = Expr::new("A AND B");
        let table = TruthTable::new(&expr);
        let rendered = table.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "|A    |B    |(A AND B)           |");
        assert_eq!(lines[1], "|-----|-----|--------------------|");
        assert_eq!(lines[2], "|0    |0    |0                   |");
        assert_eq!(lines[3], "|0    |1    |0                   |");
        assert_eq!(lines[4], "|1    |0    |0                   |");
        assert_eq!(lines[5], "|1    |1    |1                   |");
    }

    #[test]
    fn render_fails_on_degraded_postfix() {
        let expr = Expr::new("A XOR D");
        let table = TruthTable::new(&expr);
        assert!(table.render().is_err());
    }
}
