//! Holonet Headless Mission Harness
//!
//! Composes the Episode VII scenarios against SWAPI plus the local
//! Wookieepedia supplements and writes one JSON document per scenario.
//! Scenarios run strictly in sequence, one fetch/merge/coerce/build cycle at a time.
//!
//! Usage:
//!   cargo run -p holonet-simtest
//!   cargo run -p holonet-simtest -- --verbose
//!   cargo run -p holonet-simtest -- --config holonet.json --data data --out out

use std::error::Error;
use std::path::PathBuf;

use holonet_client::config::ClientConfig;
use holonet_client::sources::{read_record, read_record_list, read_records, write_document};
use holonet_client::{Fetch, Reference, Resolver, SwapiClient};
use holonet_logic::coerce::coerce;
use holonet_logic::crew::Crew;
use holonet_logic::droid::Droid;
use holonet_logic::entity::{Entity, Jsonable};
use holonet_logic::error::RecordError;
use holonet_logic::occupant::Occupant;
use holonet_logic::passengers::Passengers;
use holonet_logic::person::Person;
use holonet_logic::planet::Planet;
use holonet_logic::record::{find_by_name, into_record, Record};
use holonet_logic::registry::IdentityRegistry;
use holonet_logic::species::Species;
use holonet_logic::starship::Starship;
use serde_json::json;

type StepResult = Result<String, Box<dyn Error>>;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn from_step(name: &str, outcome: StepResult) -> Self {
        match outcome {
            Ok(detail) => Self {
                name: name.into(),
                passed: true,
                detail,
            },
            Err(e) => {
                log::error!("{}: {}", name, e);
                Self {
                    name: name.into(),
                    passed: false,
                    detail: e.to_string(),
                }
            }
        }
    }
}

struct Args {
    verbose: bool,
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        verbose: false,
        config: None,
        data_dir: None,
        output_dir: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--config" => args.config = Some(it.next().ok_or("--config needs a path")?.into()),
            "--data" => args.data_dir = Some(it.next().ok_or("--data needs a directory")?.into()),
            "--out" => args.output_dir = Some(it.next().ok_or("--out needs a directory")?.into()),
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<ClientConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    Ok(config.validated()?)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    println!("=== Holonet Mission Harness ===\n");

    let mut harness = match load_config(&args).and_then(Harness::new) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("setup failed: {e}");
            std::process::exit(1);
        }
    };

    let results = harness.run();

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ({} identities) ===",
        passed,
        total,
        failed,
        harness.registry.len()
    );

    if failed > 0 {
        std::process::exit(1);
    }
}


// ── Mission state ───────────────────────────────────────────────────────

/// Supplemental Wookieepedia records, loaded once per run.
struct Supplements {
    planets: Vec<Record>,
    starships: Vec<Record>,
    droids: Vec<Record>,
    people: Vec<Record>,
    star_map: Record,
}

impl Supplements {
    fn load(config: &ClientConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            planets: read_records(&config.data_path("wookieepedia_planets.csv"))?,
            starships: read_records(&config.data_path("wookieepedia_starships.csv"))?,
            droids: read_record_list(&config.data_path("wookieepedia_droids.json"))?,
            people: read_record_list(&config.data_path("wookieepedia_people.json"))?,
            star_map: read_record(&config.data_path("wookieepedia_star_map.json"))?,
        })
    }
}

struct Harness<F> {
    config: ClientConfig,
    resolver: Resolver<F>,
    supplements: Supplements,
    registry: IdentityRegistry,
    // Carried between scenarios.
    x_wing: Option<Starship>,
    falcon: Option<Starship>,
    bb8: Option<Droid>,
    rey: Option<Person>,
    finn: Option<Person>,
}

fn required<'a, T>(slot: &'a Option<T>, what: &str) -> Result<&'a T, Box<dyn Error>> {
    slot.as_ref()
        .ok_or_else(|| format!("requires {what} from an earlier scenario").into())
}

fn required_mut<'a, T>(slot: &'a mut Option<T>, what: &str) -> Result<&'a mut T, Box<dyn Error>> {
    slot.as_mut()
        .ok_or_else(|| format!("requires {what} from an earlier scenario").into())
}

impl Harness<SwapiClient> {
    fn new(config: ClientConfig) -> Result<Self, Box<dyn Error>> {
        let resolver = Resolver::new(SwapiClient::new(&config)?, &config);
        let supplements = Supplements::load(&config)?;
        Ok(Self::with_parts(config, resolver, supplements))
    }
}

impl<F: Fetch> Harness<F> {
    fn with_parts(config: ClientConfig, resolver: Resolver<F>, supplements: Supplements) -> Self {
        log::info!(
            "endpoint {} | {} planets, {} starships, {} droids, {} people supplemental",
            resolver.base_url(),
            supplements.planets.len(),
            supplements.starships.len(),
            supplements.droids.len(),
            supplements.people.len()
        );
        Self {
            config,
            resolver,
            supplements,
            registry: IdentityRegistry::new(),
            x_wing: None,
            falcon: None,
            bb8: None,
            rey: None,
            finn: None,
        }
    }

    fn run(&mut self) -> Vec<TestResult> {
        let mut results = Vec::new();

        println!("--- Single entities ---");
        results.push(self.step("species_wookiee", Self::species_wookiee));
        results.push(self.step("planet_hoth", Self::planet_hoth));
        results.push(self.step("droid_r2_d2", Self::droid_r2_d2));
        results.push(self.step("person_leia", Self::person_leia));
        results.push(self.step("starship_x_wing", Self::starship_x_wing));

        println!("--- Episode VII ---");
        results.push(self.step("mission_jakku", Self::mission_jakku));
        results.push(self.step("star_map", Self::star_map));
        results.push(self.step("escape_jakku", Self::escape_jakku));
        results.push(self.step("journey_takodana", Self::journey_takodana));

        results
    }

    fn step(&mut self, name: &str, f: fn(&mut Self) -> StepResult) -> TestResult {
        log::info!("scenario {}", name);
        TestResult::from_step(name, f(self))
    }

    fn write(&self, file: &str, entity: &impl Jsonable) -> Result<PathBuf, Box<dyn Error>> {
        let path = self.config.output_path(file);
        write_document(&path, &entity.jsonable())?;
        Ok(path)
    }

    fn register(&mut self, entity: &impl Entity) -> Result<(), Box<dyn Error>> {
        Ok(self.registry.register(entity)?)
    }

    // ── Builders ────────────────────────────────────────────────────────

    /// Search `collection`, merge the same-named record from `source`, build.
    fn search<T: Entity>(
        &mut self,
        collection: &str,
        term: &str,
        source: fn(&Supplements) -> &[Record],
        factory: fn(&Record) -> Result<T, RecordError>,
    ) -> Result<T, Box<dyn Error>> {
        let entity = self.resolver.build_matched(
            Reference::Search { collection, term },
            source(&self.supplements),
            factory,
        )?;
        self.register(&entity)?;
        Ok(entity)
    }

    fn search_person(&mut self, term: &str) -> Result<Person, Box<dyn Error>> {
        let person = self.resolver.resolve_person(
            Reference::Search { collection: "people", term },
            &self.supplements.people,
            &self.supplements.planets,
        )?;
        self.register(&person)?;
        Ok(person)
    }

    fn search_planet(&mut self, term: &str) -> Result<Planet, Box<dyn Error>> {
        self.search("planets", term, |s| s.planets.as_slice(), Planet::from_record)
    }

    fn search_droid(&mut self, term: &str) -> Result<Droid, Box<dyn Error>> {
        self.search("people", term, |s| s.droids.as_slice(), Droid::from_record)
    }

    fn search_starship(&mut self, term: &str) -> Result<Starship, Box<dyn Error>> {
        self.search("starships", term, |s| s.starships.as_slice(), Starship::from_record)
    }

    // ── Scenarios ───────────────────────────────────────────────────────

    fn species_wookiee(&mut self) -> StepResult {
        let wookiee = self.resolver.build(
            Reference::Search {
                collection: "species",
                term: "wookiee",
            },
            None,
            Species::from_record,
        )?;
        self.register(&wookiee)?;
        let path = self.write("swapi_species_wookiee.json", &wookiee)?;
        Ok(format!("{} → {}", wookiee, path.display()))
    }

    fn planet_hoth(&mut self) -> StepResult {
        let hoth = self.search_planet("hoth")?;
        let path = self.write("swapi_planet_hoth.json", &hoth)?;
        Ok(format!("{} ({:?}) → {}", hoth, hoth.sector, path.display()))
    }

    fn droid_r2_d2(&mut self) -> StepResult {
        let r2 = self.search_droid("r2-d2")?;
        let path = self.write("swapi_droid_r2_d2.json", &r2)?;
        Ok(format!("{} → {}", r2, path.display()))
    }

    fn person_leia(&mut self) -> StepResult {
        let leia = self.search_person("Leia")?;
        let home = leia.homeworld.as_ref().map_or("-".to_string(), ToString::to_string);
        let path = self.write("swapi_person_leia.json", &leia)?;
        Ok(format!("{} of {} → {}", leia, home, path.display()))
    }

    fn starship_x_wing(&mut self) -> StepResult {
        let x_wing = self.search_starship("T-70 X-wing")?;
        let path = self.write("swapi_starship_x_wing.json", &x_wing)?;
        let detail = format!("{} → {}", x_wing, path.display());
        self.x_wing = Some(x_wing);
        Ok(detail)
    }

    fn mission_jakku(&mut self) -> StepResult {
        let poe = self.search_person("Poe Dameron")?;
        let mut bb8 = self.search_droid("BB8")?;
        let jakku = self.search_planet("jakku")?;

        bb8.store_instructions(into_record(json!({
            "flight_plan": {
                "destination": jakku.jsonable(),
                "hyperspace_route": "Burke's Trailing",
                "year": "34 ABY",
            }
        }))?);

        // Lor San Tekka has no SWAPI record; the supplement is all there is.
        let lor_raw = find_by_name(&self.supplements.people, "Lor San Tekka")
            .ok_or("no supplemental record for Lor San Tekka")?;
        let lor = self
            .resolver
            .create_person(&coerce(lor_raw)?, &self.supplements.planets)?;
        self.register(&lor)?;
        bb8.store_instructions(into_record(json!({ "locate_person": lor.jsonable() }))?);

        let mut x_wing = required(&self.x_wing, "the X-wing")?.clone();
        x_wing.assign_crew_members(Crew::new([
            ("pilot", Occupant::from(poe)),
            ("astro_mech_droid", Occupant::from(bb8.clone())),
        ]));
        let path = self.write("episode_vii_mission_jakku.json", &x_wing)?;
        let crew = x_wing.crew_members().map(ToString::to_string).unwrap_or_default();

        self.x_wing = Some(x_wing);
        self.bb8 = Some(bb8);
        Ok(format!("crew [{}] → {}", crew, path.display()))
    }

    fn star_map(&mut self) -> StepResult {
        let star_map = coerce(&self.supplements.star_map)?;
        let bb8 = required_mut(&mut self.bb8, "BB-8")?;
        bb8.store_instructions(into_record(json!({ "star_map": star_map }))?);

        let count = bb8.instructions().len();
        let document = bb8.jsonable();
        let path = self.config.output_path("episode_vii_star_map.json");
        write_document(&path, &document)?;
        Ok(format!("{} instructions → {}", count, path.display()))
    }

    fn escape_jakku(&mut self) -> StepResult {
        let rey = self.search_person("Rey")?;
        let finn = self.search_person("Finn")?;
        let bb8 = required(&self.bb8, "BB-8")?.clone();
        let mut falcon = self.search_starship("Millennium Falcon")?;

        falcon.assign_crew_members(Crew::new([
            ("pilot", rey.clone()),
            ("gunner", finn.clone()),
        ]));
        let boarded = falcon.add_passengers(Passengers::new([bb8]));
        let path = self.write("episode_vii_escape_jakku.json", &falcon)?;

        self.rey = Some(rey);
        self.finn = Some(finn);
        self.falcon = Some(falcon);
        Ok(format!("passengers boarded: {} → {}", boarded, path.display()))
    }

    fn journey_takodana(&mut self) -> StepResult {
        let han = self.search_person("Han Solo")?;
        let chewie = self.search_person("Chewbacca")?;
        let passengers = Passengers::new([
            Occupant::from(required(&self.rey, "Rey")?.clone()),
            Occupant::from(required(&self.finn, "Finn")?.clone()),
            Occupant::from(required(&self.bb8, "BB-8")?.clone()),
        ]);
        let mut falcon = required(&self.falcon, "the Millennium Falcon")?.clone();

        falcon.assign_crew_members(Crew::new([("pilot", han), ("co-pilot", chewie)]));
        let manifest = passengers.to_string();
        falcon.add_passengers(passengers);
        let path = self.write("episode_vii_journey_takodana.json", &falcon)?;

        self.falcon = Some(falcon);
        Ok(format!("passengers [{}] → {}", manifest, path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_client::MemoryFetcher;
    use serde_json::Value;

    const BASE: &str = "https://swapi.test/api";

    type TestHarness = Harness<MemoryFetcher>;

    // ── Helpers ────────────────────────────────────────────────────────

    fn rec(value: Value) -> Record {
        into_record(value).unwrap()
    }

    fn url(path: &str) -> String {
        format!("{BASE}/{path}/")
    }

    fn person(name: &str, id: u32) -> Value {
        json!({
            "name": name,
            "height": "unknown",
            "mass": "unknown",
            "birth_year": "unknown",
            "url": url(&format!("people/{id}")),
        })
    }

    fn starship(name: &str, id: u32, crew: &str, passengers: &str) -> Value {
        json!({
            "name": name,
            "model": name,
            "starship_class": "Starfighter",
            "manufacturer": "Incom-FreiTek",
            "length": "12.48",
            "max_atmosphering_speed": "1050",
            "hyperdrive_rating": "1.0",
            "MGLT": "100",
            "armament": "none",
            "crew": crew,
            "passengers": passengers,
            "cargo_capacity": "110",
            "consumables": "1 week",
            "url": url(&format!("starships/{id}")),
        })
    }

    fn hits(record: Value) -> Value {
        json!({ "count": 1, "results": [record] })
    }

    fn fetcher() -> MemoryFetcher {
        let mut han = person("Han Solo", 14);
        han["homeworld"] = json!(url("planets/22"));

        MemoryFetcher::new()
            .with_search(&url("starships"), "T-70 X-wing", hits(starship("T-70 X-wing fighter", 77, "1", "0")))
            .with_search(&url("starships"), "Millennium Falcon", hits(starship("Millennium Falcon", 10, "4", "6")))
            .with_search(&url("people"), "Poe Dameron", hits(person("Poe Dameron", 86)))
            .with_search(&url("people"), "Rey", hits(person("Rey", 85)))
            .with_search(&url("people"), "Finn", hits(person("Finn", 84)))
            .with_search(&url("people"), "Han Solo", hits(han))
            .with_search(&url("people"), "Chewbacca", hits(person("Chewbacca", 13)))
            .with_search(
                &url("people"),
                "BB8",
                hits(json!({ "name": "BB8", "height": "unknown", "mass": "unknown", "url": url("people/87") })),
            )
            .with_search(
                &url("planets"),
                "jakku",
                hits(json!({
                    "name": "Jakku",
                    "gravity": "1 standard",
                    "climate": "arid, desert",
                    "terrain": "deserts",
                    "population": "unknown",
                    "url": url("planets/61"),
                })),
            )
            .with_resource(
                &url("planets/22"),
                json!({
                    "name": "Corellia",
                    "gravity": "1 standard",
                    "climate": "temperate",
                    "terrain": "plains, urban",
                    "population": "3000000000",
                    "url": url("planets/22"),
                }),
            )
    }

    fn planet_row(name: &str, region: &str) -> Record {
        rec(json!({
            "name": name,
            "region": region,
            "sector": "unknown",
            "suns": "1",
            "moons": "0",
            "orbital_period_days": "364",
            "diameter_km": "unknown",
        }))
    }

    fn supplements() -> Supplements {
        Supplements {
            planets: vec![planet_row("Jakku", "Inner Rim"), planet_row("Corellia", "Core Worlds")],
            starships: vec![],
            droids: vec![rec(json!({
                "name": "BB8",
                "model": "BB-series astromech droid",
                "manufacturer": "Industrial Automaton",
                "create_year": "unknown",
                "height": "0.67",
                "mass": "18",
                "equipment": "Arc welder, Holoprojector",
            }))],
            // No row for Poe: he must come through with SWAPI data only.
            people: vec![
                rec(json!({
                    "name": "Chewbacca",
                    "birth_year": "200BBY",
                    "url": url("people/13"),
                })),
                rec(json!({
                    "name": "Lor San Tekka",
                    "birth_year": "unknown",
                    "height": "unknown",
                    "mass": "unknown",
                    "species": [],
                    "url": url("people/lor-san-tekka"),
                })),
            ],
            star_map: rec(json!({ "region": "Unknown Regions", "fragments": "2" })),
        }
    }

    fn harness(out: &std::path::Path) -> TestHarness {
        let config = ClientConfig {
            output_dir: out.to_path_buf(),
            ..ClientConfig::default()
        };
        Harness::with_parts(config, Resolver::with_base_url(fetcher(), BASE), supplements())
    }

    fn document(dir: &std::path::Path, file: &str) -> Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join(file)).unwrap()).unwrap()
    }

    fn assert_passed(result: TestResult) {
        assert!(result.passed, "{} failed: {}", result.name, result.detail);
    }

    // ── Scenarios ──────────────────────────────────────────────────────

    #[test]
    fn mission_jakku_composes_x_wing_crew() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = harness(dir.path());
        assert_passed(h.step("starship_x_wing", TestHarness::starship_x_wing));
        assert_passed(h.step("mission_jakku", TestHarness::mission_jakku));

        let doc = document(dir.path(), "episode_vii_mission_jakku.json");
        let pilot = &doc["crew_members"]["pilot"];
        assert_eq!(pilot["name"], json!("Poe Dameron"));
        assert_eq!(pilot["url"], json!(url("people/86")));
        assert_eq!(pilot["birth_year"], Value::Null);

        let droid = &doc["crew_members"]["astro_mech_droid"];
        assert_eq!(droid["model"], json!("BB-series astromech droid"));
        assert_eq!(droid["height"], json!(0.67));
        let plan = &droid["instructions"][0]["flight_plan"];
        assert_eq!(plan["destination"]["region"], json!("Inner Rim"));
        assert_eq!(plan["destination"]["climate"], json!(["arid", "desert"]));
        assert_eq!(droid["instructions"][1]["locate_person"]["name"], json!("Lor San Tekka"));
        assert_eq!(doc["passengers_on_board"], Value::Null);
    }

    #[test]
    fn journey_takodana_carries_state_between_scenarios() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = harness(dir.path());
        assert_passed(h.step("starship_x_wing", TestHarness::starship_x_wing));
        assert_passed(h.step("mission_jakku", TestHarness::mission_jakku));
        assert_passed(h.step("star_map", TestHarness::star_map));
        assert_passed(h.step("escape_jakku", TestHarness::escape_jakku));
        assert_passed(h.step("journey_takodana", TestHarness::journey_takodana));

        let escape = document(dir.path(), "episode_vii_escape_jakku.json");
        assert_eq!(escape["crew_members"]["pilot"]["name"], json!("Rey"));
        assert_eq!(escape["crew_members"]["gunner"]["name"], json!("Finn"));

        let doc = document(dir.path(), "episode_vii_journey_takodana.json");
        let crew = doc["crew_members"].as_object().unwrap();
        assert_eq!(crew.keys().map(String::as_str).collect::<Vec<_>>(), ["pilot", "co-pilot"]);
        assert_eq!(crew["pilot"]["homeworld"]["region"], json!("Core Worlds"));
        assert_eq!(crew["co-pilot"]["birth_year"], json!("200BBY"));

        let names: Vec<&str> = doc["passengers_on_board"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Rey", "Finn", "BB8"]);
        // BB-8 boards with every instruction stored so far, star map included.
        let bb8 = &doc["passengers_on_board"][2];
        assert_eq!(bb8["instructions"].as_array().unwrap().len(), 3);
        assert_eq!(bb8["instructions"][2]["star_map"]["fragments"], json!("2"));

        assert!(h.registry.contains(&url("people/87")));
        assert!(h.registry.contains(&url("people/lor-san-tekka")));
    }

    #[test]
    fn later_scenario_without_prerequisite_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = harness(dir.path());
        let result = h.step("star_map", TestHarness::star_map);
        assert!(!result.passed);
        assert!(result.detail.contains("BB-8"));
        assert!(!dir.path().join("episode_vii_star_map.json").exists());
    }
}
