mod command;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tableview::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep_until};

use command::{Command, HELP};

const CITIES: &[(&str, &str, &str, &str)] = &[
    ("Tokyo", "Japan", "Asia", "37400068"),
    ("Delhi", "India", "Asia", "28514000"),
    ("Shanghai", "China", "Asia", "25582000"),
    ("São Paulo", "Brazil", "South America", "21650000"),
    ("Ciudad de México", "Mexico", "North America", "21581000"),
    ("Cairo", "Egypt", "Africa", "20076000"),
    ("Mumbai", "India", "Asia", "19980000"),
    ("Beijing", "China", "Asia", "19618000"),
    ("Dhaka", "Bangladesh", "Asia", "19578000"),
    ("Ōsaka", "Japan", "Asia", "19281000"),
    ("New York", "United States", "North America", "18819000"),
    ("Karachi", "Pakistan", "Asia", "15400000"),
    ("Buenos Aires", "Argentina", "South America", "14967000"),
    ("İstanbul", "Turkey", "Europe", "14751000"),
    ("Lagos", "Nigeria", "Africa", "13463000"),
    ("Kinshasa", "DR Congo", "Africa", ""),
    ("Paris", "France", "Europe", "10901000"),
];

fn sample_table() -> (MemoryTable, Vec<HeaderCell>) {
    let headers = vec![
        HeaderCell::new("City"),
        HeaderCell::new("Where").span(2),
        HeaderCell::new("Population"),
        HeaderCell::new("Notes").unsortable(),
    ];
    let mut table = MemoryTable::new(headers.clone());
    for (idx, (city, country, continent, population)) in CITIES.iter().enumerate() {
        let note = if population.is_empty() { "no data" } else { "" };
        table.push_row([*city, *country, *continent, *population, note]);
        if idx == 2 {
            // Pre-filtered before the engines start; stays out for good.
            table.push_hidden_row(["Atlantis", "-", "Ocean", "0", "hidden"]);
        }
    }
    (table, headers)
}

fn print_table(controller: &TableController<MemoryTable>) {
    println!("{}", controller.body().render_text());
    println!("{}", controller.render_pager());
}

/// Sleep until a deadline, or wait forever if None.
/// This is used as a conditional branch in tokio::select!
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(d).await,
        None => std::future::pending::<()>().await,
    }
}

async fn run() -> std::io::Result<()> {
    let (table, headers) = sample_table();
    let config = TableConfig::default().page_size(5);
    let mut controller = TableController::new(table, &headers, config);
    log::info!(
        "Demo table: {} rows, {} excluded",
        controller.page_state().total_count,
        controller.row_set().excluded_count()
    );

    print_table(&controller);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = sleep_until_optional(controller.sort_deadline()) => {
                let committed = controller.commit_due(Instant::now());
                log::debug!("Committed {} sort(s)", committed);
                print_table(&controller);
                continue;
            }
        };

        // EOF
        let Some(line) = line else {
            controller.settle().await;
            break;
        };

        match line.parse::<Command>() {
            Ok(Command::Sort(header)) => {
                if controller.click_header(header) {
                    // Shows the in-progress cue until the sort commits.
                    print_table(&controller);
                } else {
                    println!("header {} is not sortable", header);
                }
            }
            Ok(Command::Cancel) => {
                let dropped = controller.cancel_sort();
                println!("cancelled {} pending sort(s)", dropped);
            }
            Ok(Command::Pager(action)) => {
                controller.pager_action(action);
                print_table(&controller);
            }
            Ok(Command::Add(cells)) => {
                let id = controller.body_mut().push_row(cells);
                controller.rows_changed();
                println!("added row {}", id);
                print_table(&controller);
            }
            Ok(Command::Remove(id)) => {
                if controller.body_mut().remove_row(id) {
                    controller.rows_changed();
                    print_table(&controller);
                } else {
                    println!("no row {}", id);
                }
            }
            Ok(Command::Show) => print_table(&controller),
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    log::info!("Demo finished on page {}", controller.page_state().label());
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("tableview-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
