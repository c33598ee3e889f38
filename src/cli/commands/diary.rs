use crate::cli::parser::{Commands, DiaryAction};
use crate::config::Config;
use crate::core::diary;
use crate::core::period::Period;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::diary::{DiaryRecord, DiaryStatus};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{is_weekend, parse_date_or_today, weekday_short};
use crate::utils::formatting::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Diary { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;
        let org = cfg.organization_id;

        match action {
            DiaryAction::Add {
                site,
                date,
                weather,
                temp_morning,
                temp_noon,
                equipment,
                notes,
            } => {
                queries::get_site(conn, org, *site)?.ok_or(AppError::SiteNotFound(*site))?;
                let d = parse_date_or_today(date.as_deref())?;

                let existing = queries::get_diary(conn, org, *site, d)?;

                match existing {
                    Some(record) if record.is_locked() => {
                        return Err(AppError::DiaryLocked {
                            site: *site,
                            date: d.to_string(),
                        });
                    }
                    // One record per site and day: later adds merge into it.
                    Some(mut record) => {
                        if let Some(w) = weather {
                            record.weather = w.clone();
                        }
                        if temp_morning.is_some() {
                            record.temp_morning = *temp_morning;
                        }
                        if temp_noon.is_some() {
                            record.temp_noon = *temp_noon;
                        }
                        if let Some(e) = equipment {
                            record.equipment = e.clone();
                        }
                        if let Some(n) = notes {
                            record.notes = n.clone();
                        }
                        queries::update_diary(conn, &record)?;
                        ttlog(conn, "diary", &format!("site {site} {d}"), "Diary updated")?;
                        success(format!("Diary for site {} on {} updated.", site, d));
                    }
                    None => {
                        let record = DiaryRecord {
                            id: 0,
                            org_id: org,
                            site_id: *site,
                            date: d,
                            weather: weather.clone().unwrap_or_default(),
                            temp_morning: *temp_morning,
                            temp_noon: *temp_noon,
                            equipment: equipment.clone().unwrap_or_default(),
                            notes: notes.clone().unwrap_or_default(),
                            status: DiaryStatus::Draft,
                        };
                        queries::insert_diary(conn, &record)?;
                        ttlog(conn, "diary", &format!("site {site} {d}"), "Diary created")?;
                        success(format!("Diary for site {} on {} created.", site, d));
                    }
                }
            }

            DiaryAction::Show { site, date } => {
                let d = parse_date_or_today(date.as_deref())?;
                let record =
                    queries::get_diary(conn, org, *site, d)?.ok_or(AppError::DiaryNotFound {
                        site: *site,
                        date: d.to_string(),
                    })?;

                let status = match record.status {
                    DiaryStatus::Draft => format!("{YELLOW}draft{RESET}"),
                    DiaryStatus::Signed => format!("{GREEN}signed ✍{RESET}"),
                };

                println!("{CYAN}📅 Diary, site {} on {}{RESET} ({})", site, d, status);
                println!("  Weather:   {}", display_or_dash(&record.weather));
                println!(
                    "  Temp:      morning {} / noon {}",
                    display_temp(record.temp_morning),
                    display_temp(record.temp_noon)
                );
                println!("  Equipment: {}", display_or_dash(&record.equipment));
                if record.notes.is_empty() {
                    println!("  Notes:     {GREY}--{RESET}");
                } else {
                    println!("  Notes:");
                    for line in textwrap::wrap(&record.notes, 70) {
                        println!("    {}", line);
                    }
                }
            }

            DiaryAction::Sign { site, date } => {
                let d = parse_date_or_today(date.as_deref())?;
                let record =
                    queries::get_diary(conn, org, *site, d)?.ok_or(AppError::DiaryNotFound {
                        site: *site,
                        date: d.to_string(),
                    })?;

                if record.status == DiaryStatus::Signed {
                    warning(format!("Diary for site {} on {} is already signed.", site, d));
                    return Ok(());
                }

                queries::set_diary_status(conn, org, *site, d, DiaryStatus::Signed)?;
                ttlog(conn, "diary", &format!("site {site} {d}"), "Diary signed")?;
                success(format!(
                    "Diary for site {} on {} signed. Edits are locked until unlock.",
                    site, d
                ));
            }

            DiaryAction::Unlock { site, date } => {
                let d = parse_date_or_today(date.as_deref())?;
                let record =
                    queries::get_diary(conn, org, *site, d)?.ok_or(AppError::DiaryNotFound {
                        site: *site,
                        date: d.to_string(),
                    })?;

                if record.status == DiaryStatus::Draft {
                    warning(format!("Diary for site {} on {} is not signed.", site, d));
                    return Ok(());
                }

                queries::set_diary_status(conn, org, *site, d, DiaryStatus::Draft)?;
                ttlog(conn, "diary", &format!("site {site} {d}"), "Diary unlocked")?;
                success(format!("Diary for site {} on {} unlocked.", site, d));
            }

            DiaryAction::Month { site, month } => {
                queries::get_site(conn, org, *site)?.ok_or(AppError::SiteNotFound(*site))?;

                let p = match month {
                    Some(raw) => match Period::parse(raw)? {
                        p @ Period::Month { .. } => p,
                        _ => return Err(AppError::InvalidPeriod(raw.clone())),
                    },
                    None => Period::current_month(),
                };
                let (start, end) = p.resolve()?;

                let records = queries::list_diary_site_between(conn, org, *site, start, end)?;
                let logs = queries::list_attendance_site_between(conn, org, *site, start, end)?;
                let materials =
                    queries::list_materials_site_between(conn, org, *site, start, end)?;

                let stats = diary::month_stats(&records, &logs, &materials);

                println!("{CYAN}📅 Diary overview, site {} for {}{RESET}\n", site, p.label());

                let mut d = start;
                while d <= end {
                    let day = stats.get(&d);

                    let marker = match day.and_then(|s| s.status) {
                        Some(DiaryStatus::Signed) => format!("{GREEN}✍{RESET}"),
                        Some(DiaryStatus::Draft) => format!("{YELLOW}●{RESET}"),
                        None if day.is_some_and(|s| s.has_record) => format!("{YELLOW}●{RESET}"),
                        None => format!("{GREY}·{RESET}"),
                    };

                    let hours = day.map(|s| s.total_hours).unwrap_or(0.0);
                    let hours_str = if hours > 0.0 {
                        format_hours(hours)
                    } else {
                        format!("{GREY}--{RESET}")
                    };

                    let work = day
                        .map(|s| s.work_lines.join("; "))
                        .unwrap_or_default();

                    let wd = weekday_short(d);
                    let wd_colored = if is_weekend(d) {
                        format!("{GREY}{wd}{RESET}")
                    } else {
                        wd.to_string()
                    };

                    println!("{} {} {}  {:>8}  {}", d, wd_colored, marker, hours_str, work);

                    d = match d.succ_opt() {
                        Some(n) => n,
                        None => break,
                    };
                }
            }
        }
    }

    Ok(())
}

fn display_or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        s.to_string()
    }
}

fn display_temp(t: Option<f64>) -> String {
    match t {
        Some(v) => format!("{v:.0} °C"),
        None => format!("{GREY}--{RESET}"),
    }
}
