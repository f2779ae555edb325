//! Whole-session tests: each drives an app from a scripted stdin and checks
//! what it printed and what it left behind.

use std::{fs, io::Cursor, path::Path};

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::{config::Settings, console::Console, moods::MoodApp, petcare::PetApp};

type Script = Cursor<Vec<u8>>;

fn fixed_now() -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 6, 1)
    .unwrap()
    .and_hms_opt(10, 0, 0)
    .unwrap()
}

fn console(script: &str) -> Console<Script, Vec<u8>> {
  Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn printed(output: &[u8]) -> String { String::from_utf8_lossy(output).into_owned() }

// ─── Mood tracker ────────────────────────────────────────────────────────────

fn run_moods(script: &str, dump: &Path) -> (MoodApp<Script, Vec<u8>>, String) {
  let mut app = MoodApp::new(console(script), dump).with_clock(fixed_now);
  app.run().unwrap();
  let out = printed(app.console().output());
  (app, out)
}

const ADD_CALM_EARLY: &str = "a\ncalm\nn\n06/01/2024\n08:00:00\n\n";

#[test]
fn mood_added_for_today_uses_the_clock() {
  let tmp = TempDir::new().unwrap();
  let (app, out) = run_moods("a\ncalm\ny\nslept well\nM\nExit\n", &tmp.path().join("m.txt"));

  assert!(out.contains("The mood has been added to the tracker"));
  assert!(out.contains("Mood: calm\nDate: 06/01/2024\nTime: 10:00:00\nNotes: slept well"));
  assert!(out.ends_with("Exiting Mood Tracker. Goodbye!\n"));
  assert_eq!(app.journal.len(), 1);
}

#[test]
fn duplicate_mood_is_rejected() {
  let tmp = TempDir::new().unwrap();
  let script = format!("{ADD_CALM_EARLY}{ADD_CALM_EARLY}Exit\n");
  let (app, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("the same mood is already tracked at that date and time"));
  assert_eq!(app.journal.len(), 1);
}

#[test]
fn malformed_date_does_not_create_a_mood() {
  let tmp = TempDir::new().unwrap();
  let (app, out) = run_moods("a\ncalm\nn\n2024-06-01\nExit\n", &tmp.path().join("m.txt"));

  assert!(out.contains("Incorrect format of date. Cannot create mood."));
  assert!(app.journal.is_empty());
}

#[test]
fn moods_are_deleted_by_date() {
  let tmp = TempDir::new().unwrap();
  let script = format!(
    "{ADD_CALM_EARLY}a\ntense\nn\n06/01/2024\n17:00:00\n\nd\n1\n06/01/2024\nd\n1\n06/01/2024\nExit\n"
  );
  let (app, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("The moods have been deleted"));
  assert!(out.contains("No matching moods found"));
  assert!(app.journal.is_empty());
}

#[test]
fn one_mood_is_deleted_by_key() {
  let tmp = TempDir::new().unwrap();
  let script = format!("{ADD_CALM_EARLY}d\n2\nCalm\n06/01/2024\n08:00:00\nd\n2\ncalm\n06/01/2024\n08:00:00\nExit\n");
  let (app, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("No matching mood found"));
  assert!(out.contains("The mood has been deleted"));
  assert!(app.journal.is_empty());
}

#[test]
fn notes_are_edited_in_place() {
  let tmp = TempDir::new().unwrap();
  let script =
    format!("{ADD_CALM_EARLY}e\ncalm\n06/01/2024\n08:00:00\nafter coffee\nExit\n");
  let (app, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("The mood has been successfully edited"));
  let mood = app.journal.iter().next().unwrap();
  assert_eq!(mood.notes(), Some("after coffee"));
}

#[test]
fn edit_without_notes_changes_nothing() {
  let tmp = TempDir::new().unwrap();
  let script = format!("{ADD_CALM_EARLY}e\ncalm\n06/01/2024\n08:00:00\n   \nExit\n");
  let (app, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("No notes entered"));
  assert_eq!(app.journal.iter().next().unwrap().notes(), None);
}

#[test]
fn search_reports_hits_and_misses() {
  let tmp = TempDir::new().unwrap();
  let script = format!(
    "{ADD_CALM_EARLY}s\n1\n06/01/2024\ns\n2\nsad\n06/01/2024\n08:00:00\nExit\n"
  );
  let (_, out) = run_moods(&script, &tmp.path().join("m.txt"));

  assert!(out.contains("Mood: calm\nDate: 06/01/2024\nTime: 08:00:00\nNotes: No notes"));
  assert!(out.contains("No matching records could be found!"));
}

#[test]
fn moods_are_written_to_the_dump_file() {
  let tmp = TempDir::new().unwrap();
  let dump = tmp.path().join("moods.txt");
  let script = format!("{ADD_CALM_EARLY}w\nExit\n");
  let (_, out) = run_moods(&script, &dump);

  assert!(out.contains("The entries are written to a file"));
  let text = fs::read_to_string(&dump).unwrap();
  assert!(text.starts_with("Mood: calm\n"));
}

#[test]
fn unknown_command_and_end_of_input() {
  let tmp = TempDir::new().unwrap();
  let (_, out) = run_moods("exit\na\ncalm\n", &tmp.path().join("m.txt"));

  assert!(out.contains("Invalid option. Please try again."));
  assert!(!out.contains("Goodbye"));
}

// ─── Pet care scheduler ──────────────────────────────────────────────────────

fn settings(tmp: &TempDir) -> Settings {
  Settings {
    pets_file:         tmp.path().join("pets.txt"),
    appointments_file: tmp.path().join("appointments.txt"),
    moods_file:        tmp.path().join("moods.txt"),
  }
}

fn run_petcare(script: &str, tmp: &TempDir) -> (PetApp<Script, Vec<u8>>, String) {
  let mut app = PetApp::new(console(script), settings(tmp)).with_clock(fixed_now);
  app.load().unwrap();
  app.run().unwrap();
  let out = printed(app.console().output());
  (app, out)
}

const REGISTER_P1: &str = "1\nP1\nRex\nDog/Labrador\n3\nJordan\n555-0100\n";
const BOOK_VACCINATION: &str = "2\nP1\nVaccination\n2024-07-01\n09:00\nbooster\n";

#[test]
fn pet_registration_retries_bad_age_and_rejects_duplicates() {
  let tmp = TempDir::new().unwrap();
  let script = "1\nP1\nRex\nDog/Labrador\nthree\n3\nJordan\n555-0100\n1\np1\n6\n";
  let (app, out) = run_petcare(script, &tmp);

  assert!(out.contains("Invalid number. Please try again."));
  assert!(out.contains("Pet registered successfully!"));
  assert!(out.contains("Error: Pet with ID p1 already exists."));
  assert_eq!(app.scheduler.pet_count(), 1);
  let rex = app.scheduler.find_pet("P1").unwrap();
  assert_eq!(rex.age(), 3);
  assert_eq!(rex.registered_on(), fixed_now().date());
}

#[test]
fn delimiter_in_pet_fields_is_refused_and_store_still_saves() {
  let tmp = TempDir::new().unwrap();
  let script = format!("1\nP1\nRex|Jr\nDog\n2\nJordan\n555-0100\n{REGISTER_P1}3\n6\n");
  let (app, out) = run_petcare(&script, &tmp);

  assert!(out.contains(
    "Error registering pet: pet name cannot contain '|' or a line break: \"Rex|Jr\""
  ));
  assert!(out.contains("Data stored successfully!"));
  assert_eq!(app.scheduler.pet_count(), 1);
  assert_eq!(
    fs::read_to_string(tmp.path().join("pets.txt")).unwrap(),
    "P1|Rex|Dog/Labrador|3|Jordan|555-0100|2024-06-01\n"
  );
}

#[test]
fn scheduling_needs_a_pet() {
  let tmp = TempDir::new().unwrap();
  let (_, out) = run_petcare("2\n6\n", &tmp);
  assert!(out.contains("No pets registered. Please register a pet first."));

  let (_, out) = run_petcare(&format!("{REGISTER_P1}2\nP9\n6\n"), &tmp);
  assert!(out.contains("Error: Pet with ID P9 not found."));
}

#[test]
fn scheduling_rejects_bad_types_and_past_slots() {
  let tmp = TempDir::new().unwrap();
  let script = format!(
    "{REGISTER_P1}2\nP1\ncheckup\n2\nP1\nCheckup\n2024-05-01\n09:00\n\n{BOOK_VACCINATION}6\n"
  );
  let (app, out) = run_petcare(&script, &tmp);

  assert!(out.contains(
    "valid types: [Checkup, Vaccination, Surgery, Emergency, Grooming]"
  ));
  assert!(out.contains("appointment must be scheduled for a future date and time"));
  assert!(out.contains("Appointment scheduled successfully for Rex!"));
  assert_eq!(app.scheduler.appointment_count(), 1);
  assert_eq!(app.scheduler.find_pet("P1").unwrap().appointments().len(), 1);
}

#[test]
fn stored_data_is_loaded_by_the_next_session() {
  let tmp = TempDir::new().unwrap();
  let (_, out) = run_petcare(&format!("{REGISTER_P1}{BOOK_VACCINATION}3\n6\n"), &tmp);
  assert!(out.contains("Data stored successfully!"));
  assert_eq!(
    fs::read_to_string(tmp.path().join("appointments.txt")).unwrap(),
    "Vaccination|2024-07-01|09:00|booster\n"
  );

  let (app, out) = run_petcare("6\n", &tmp);
  assert!(out.contains("Loaded 1 pets from file."));
  assert!(out.contains("Loaded 1 appointments from file."));
  assert_eq!(app.scheduler.pet_count(), 1);
  assert_eq!(app.scheduler.appointment_count(), 1);
}

#[test]
fn corrupt_pet_file_is_reported_and_partially_loaded() {
  let tmp = TempDir::new().unwrap();
  fs::write(
    tmp.path().join("pets.txt"),
    "P1|Rex|Dog|3|Jordan|555|2024-01-01\nP2|Tom|Cat|x|Sam|556|2024-01-01\n",
  )
  .unwrap();

  let (app, out) = run_petcare("6\n", &tmp);
  assert!(out.contains("Error loading pets: line 2"));
  assert_eq!(app.scheduler.pet_count(), 1);
}

#[test]
fn pet_details_show_appointment_history() {
  let tmp = TempDir::new().unwrap();
  let script = format!("{REGISTER_P1}{BOOK_VACCINATION}4\n3\nP1\n4\n3\nP2\n6\n");
  let (_, out) = run_petcare(&script, &tmp);

  assert!(out.contains("Registration Date: 2024-06-01"));
  assert!(out.contains("Appointment History:"));
  assert!(out.contains("  - Vaccination on 2024-07-01 at 09:00 (booster)"));
  assert!(out.contains("Pet not found."));
}

#[test]
fn reports_summarise_the_schedule() {
  let tmp = TempDir::new().unwrap();
  let script = format!("{REGISTER_P1}{BOOK_VACCINATION}5\n1\n5\n2\n5\n3\n5\n4\n6\n");
  let (_, out) = run_petcare(&script, &tmp);

  assert!(out.contains("Total Pets Registered: 1"));
  assert!(out.contains("Total Appointments: 1"));
  assert!(out.contains("Total Upcoming: 1"));
  assert!(out.contains("Vaccination: 1"));
  assert!(out.contains("Pets without a visit in the last 6 months: 0"));
}

#[test]
fn non_numeric_menu_choice_is_retried() {
  let tmp = TempDir::new().unwrap();
  let (_, out) = run_petcare("abc\n9\n6\n", &tmp);

  assert!(out.contains("Invalid number. Please try again."));
  assert!(out.contains("Invalid choice. Please try again."));
  assert!(out.ends_with("Exiting application. Goodbye!\n"));
}
