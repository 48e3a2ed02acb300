//! Plain-text rendering of the company report.
//!
//! Layout per company (indentation is significant):
//!
//! ```text
//!     Company Id: 1
//!     Company Name: Acme
//!     Users Emailed:
//!         Smith, A, a@x
//!           Previous Token Balance: 5
//!           New Token Balance: 5
//!     Users Not Emailed:
//!         Jones, B, b@x
//!           Previous Token Balance: 20
//!           New Token Balance: 30
//!         Total Top Ups for Acme: 10
//! ```
//!
//! Companies are separated by exactly one blank line and the document ends
//! with the last company's summary line.

use std::io::{self, Write};

use topup_report_domain::model::{EnrichedCompany, User};
use topup_report_shared_kernel::TokenAmount;

const SECTION: &str = "    ";
const USER: &str = "        ";
const BALANCE: &str = "          ";

/// Render `companies` in the given order into `out`.
pub fn write_report<W: Write>(out: &mut W, companies: &[EnrichedCompany]) -> io::Result<()> {
    for (index, enriched) in companies.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_company(out, enriched)?;
    }
    Ok(())
}

fn write_company<W: Write>(out: &mut W, enriched: &EnrichedCompany) -> io::Result<()> {
    let company = &enriched.company;
    writeln!(out, "{SECTION}Company Id: {}", company.id)?;
    writeln!(out, "{SECTION}Company Name: {}", company.name)?;

    // emailed users are never credited, whatever their active status
    writeln!(out, "{SECTION}Users Emailed:")?;
    write_users(out, &enriched.emailed_users, TokenAmount::ZERO)?;

    writeln!(out, "{SECTION}Users Not Emailed:")?;
    write_users(out, &enriched.not_emailed_users, company.top_up)?;

    writeln!(out, "{USER}Total Top Ups for {}: {}", company.name, enriched.total_top_ups())
}

fn write_users<W: Write>(out: &mut W, users: &[User], top_up: TokenAmount) -> io::Result<()> {
    for user in users {
        writeln!(out, "{USER}{}, {}, {}", user.last_name, user.first_name, user.email)?;
        writeln!(out, "{BALANCE}Previous Token Balance: {}", user.tokens)?;
        writeln!(out, "{BALANCE}New Token Balance: {}", user.new_balance(top_up))?;
    }
    Ok(())
}
