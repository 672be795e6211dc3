use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result;
use tracing::{info, warn};

use crate::landmark::resolve_landmark;
use crate::maps::{NearbySearch, PlacesApi};
use crate::nearby::collect_nearby;
use crate::report::write_report;

/// Language hint sent with every provider call.
const LANGUAGE: &str = "zh-TW";
/// Category filter for the nearby search.
const PLACE_TYPE: &str = "point_of_interest";
/// Pause between result pages; the provider expects this pacing.
const PAGE_PACING: Duration = Duration::from_secs(2);

/// Drive one interactive session: resolve a landmark once, then keep asking
/// for radius/keyword pairs until the operator enters an empty line. Each
/// completed search is exported to `out_dir`.
pub async fn run(
    provider: &impl PlacesApi,
    input: &mut impl BufRead,
    out_dir: &Path,
) -> Result<()> {
    let name = prompt(input, "請輸入地標名稱 (中文或英文): ")?;
    let landmark = match resolve_landmark(provider, &name, LANGUAGE).await {
        Ok(Some(landmark)) => landmark,
        Ok(None) => {
            println!("無法取得地標資訊");
            return Ok(());
        }
        Err(error) => {
            warn!("geocoding failed: {error}");
            println!("無法取得地標資訊");
            return Ok(());
        }
    };
    println!("地標資訊：{landmark}");

    loop {
        let radius_input = prompt(input, "請輸入查詢方圓多少公尺 (或按下 'Enter' 結束查詢): ")?;
        if radius_input.is_empty() {
            break;
        }
        let Ok(radius) = radius_input.parse::<u32>() else {
            println!("輸入的半徑不是有效的數字");
            continue;
        };

        let keyword = prompt(input, "請輸入店家種類 (例如：拉麵店、飲料店) (或按下 'Enter' 結束查詢): ")?;
        if keyword.is_empty() {
            break;
        }

        let search = NearbySearch {
            location: landmark.location,
            radius,
            keyword: keyword.clone(),
            place_type: PLACE_TYPE.to_string(),
            language: LANGUAGE.to_string(),
        };
        let sweep = collect_nearby(provider, &search, PAGE_PACING).await;
        if let Some(error) = &sweep.interrupted {
            warn!(keyword = %keyword, "nearby search stopped early: {error}");
        }
        info!(keyword = %keyword, count = sweep.places.len(), "search finished");

        println!("找到的 {keyword} 總數: {}", sweep.places.len());
        let path = write_report(out_dir, &name, radius, &keyword, &sweep.places)?;
        println!("{keyword} 詳細資料已輸出至 {}", path.display());
    }

    println!("結束查詢");
    Ok(())
}

/// Print a prompt on stdout and read one trimmed line; EOF reads as empty.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
