use chrono::NaiveDate;
use sales_dashboard::dashboard::{DashboardView, EMPTY_RANGE_MESSAGE, Interval, PARSE_ERROR_MESSAGE};
use sales_dashboard::{Dashboard, DashboardQuery, ParserBuilder};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // usage: sales_report [file.csv] [start yyyy-mm-dd] [end yyyy-mm-dd] [interval]
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        args[1].as_str()
    } else {
        println!("Using example sales data from demos/sample.csv\n");
        "demos/sample.csv"
    };

    let mut query = DashboardQuery::new();
    if let Some(start) = args.get(2).filter(|s| !s.is_empty()) {
        query = query.start(NaiveDate::parse_from_str(start, "%Y-%m-%d")?);
    }
    if let Some(end) = args.get(3).filter(|s| !s.is_empty()) {
        query = query.end(NaiveDate::parse_from_str(end, "%Y-%m-%d")?);
    }
    if let Some(interval) = args.get(4) {
        query = query.interval(interval.parse::<Interval>()?);
    }

    let records = match ParserBuilder::new().filename(file_path).parse() {
        Ok(records) => records,
        Err(e) => {
            println!("{}", e.user_message());
            println!("{}", PARSE_ERROR_MESSAGE);
            return Ok(());
        }
    };

    println!("Loaded {} transactions\n", records.len());

    let dashboard = match Dashboard::build(&records, &query) {
        DashboardView::Empty => {
            println!("{}", EMPTY_RANGE_MESSAGE);
            return Ok(());
        }
        DashboardView::Ready(dashboard) => dashboard,
    };

    println!("Profit & revenue per {}:", dashboard.granularity);
    for bucket in &dashboard.series {
        println!(
            "  {:>10}  profit {:>10.2}  net revenue {:>10.2}",
            dashboard.axis_format.format(bucket.date),
            bucket.total_profit,
            bucket.net_revenue
        );
    }

    println!("\nTop-selling items:");
    for (i, item) in dashboard.top_items.iter().enumerate() {
        println!(
            "  {}. {} ({} units)",
            i + 1,
            item.name.as_deref().unwrap_or("N/A"),
            item.value
        );
    }

    println!("\n{}", dashboard.summary);

    Ok(())
}
