use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for rentmap
pub fn rentmap() -> Command {
    let mut cmd = cargo_bin_cmd!("rentmap");
    cmd.env_remove("RENTMAP_DATA");
    cmd
}

/// Four listings at three addresses; 노원빌 has no coordinate
pub const LISTINGS: &str = r#"[
  {"id": 1, "propertyId": "하이빌", "unit": "101", "address": "서울 강북구 도봉로 1",
   "district": "강북구", "structure": "원룸", "gender": "여성", "supplyType": "청년",
   "exclusiveArea": 25, "deposit": 5000000, "monthlyRent": 300000, "lat": 37.5, "lng": 127.0},
  {"id": 1, "propertyId": "하이빌", "unit": "102", "address": "서울 강북구 도봉로 1",
   "district": "강북구", "structure": "투룸", "gender": "", "supplyType": "청년",
   "exclusiveArea": 33, "deposit": 10000000, "monthlyRent": 400000, "lat": 37.5, "lng": 127.0},
  {"id": 2, "propertyId": "도봉하우스", "unit": "1", "address": "서울 도봉구 마들로 5",
   "district": "도봉구", "structure": "투룸", "gender": "남성", "supplyType": "신혼",
   "exclusiveArea": 50, "deposit": 20000000, "monthlyRent": 500000, "lat": 37.7, "lng": 127.2},
  {"id": 3, "propertyId": "노원빌", "unit": "201", "address": "서울 노원구 상계로 9",
   "district": "노원구", "structure": "원룸", "exclusiveArea": 18}
]"#;

/// Write the listing fixture to `dir/properties.json`
pub fn write_listings(dir: &Path) -> PathBuf {
    write_data(dir, LISTINGS)
}

pub fn write_data(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("properties.json");
    fs::write(&path, content).unwrap();
    path
}

/// A rentmap command with `--data` pointing at a fresh listing fixture
pub fn with_listings(dir: &Path) -> Command {
    let data = write_listings(dir);
    let mut cmd = rentmap();
    cmd.current_dir(dir).arg("--data").arg(data);
    cmd
}
