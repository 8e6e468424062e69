use crate::app::AppContext;
use crate::cli::CarsArgs;
use crate::output::{car_columns, car_rows, cars_json};
use crate::ui::{header, parse_format, print, table};

pub fn handle_cars(ctx: &AppContext, args: &CarsArgs) -> anyhow::Result<()> {
    let format = parse_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    let ui = ctx.ui_context(args.json, format);

    let ledger = ctx.build_ledger()?;
    let cars: Vec<_> = if args.all {
        ledger.cars().iter().collect()
    } else {
        ledger.list_available_cars().collect()
    };

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&cars_json(cars))?);
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui, &header(&ui, "cars"));
    }
    let currency = ctx.currency_symbol()?;
    print(
        &ui,
        &table(&ui, &car_columns(args.all), &car_rows(cars, currency, args.all)),
    );
    Ok(())
}
