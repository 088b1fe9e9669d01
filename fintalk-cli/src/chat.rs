//! Line-oriented chat front end: the reference caller that matches on a
//! classified intent and renders a reply. Nothing here moves money; buy
//! and sell end at a printed order summary.

use std::io::{BufRead, Write};

use anyhow::Result;

use fintalk_core::{Classifier, Intent, validate_quantity};

const USAGE: &str = "\
指令說明：
  -120 / +5000 / 100 早餐   快速記帳（負數支出、正數收入，可加備註）
  飲食 120 午餐             分類記帳（飲食/交通/居住/娛樂/購物/醫療/其他）
  薪資 50000               分類收入（薪資/獎金/股息/投資獲利/兼職/其他）
  TSLA                     查詢股價
  買 2330 / 買入 TSLA       買進
  賣 2330 / 賣出 TSLA       賣出
  帳戶 / 資產 / 持倉 / 記帳  檢視
  說明                      顯示本說明";

/// Render the one-line (or multi-line) reply for a classified intent.
/// Exhaustive on purpose: adding a variant must touch this match.
pub fn reply_for(intent: &Intent) -> String {
    match intent {
        Intent::Expense { amount, note } => match note {
            Some(n) => format!("已記支出 {amount} 元（{n}）"),
            None => format!("已記支出 {amount} 元"),
        },
        Intent::Income { amount, note } => match note {
            Some(n) => format!("已記收入 {amount} 元（{n}）"),
            None => format!("已記收入 {amount} 元"),
        },
        Intent::StockQuery { symbol } => format!("查詢 {symbol} 報價…"),
        Intent::BuyAction { symbol } => format!("準備買進 {symbol}，請輸入股數："),
        Intent::SellAction { symbol } => format!("準備賣出 {symbol}，請輸入股數："),
        Intent::ExpenseCategory {
            category,
            amount,
            note,
        } => match note {
            Some(n) => format!("已記{}支出 {amount} 元（{n}）", category.label()),
            None => format!("已記{}支出 {amount} 元", category.label()),
        },
        Intent::IncomeCategory {
            category,
            amount,
            note,
        } => match note {
            Some(n) => format!("已記{}收入 {amount} 元（{n}）", category.label()),
            None => format!("已記{}收入 {amount} 元", category.label()),
        },
        Intent::QuantityInput { quantity } => format!("股數 {quantity}"),
        Intent::Help => USAGE.to_string(),
        Intent::Portfolio => "持倉一覽：（示範模式，無資料）".to_string(),
        Intent::AccountList => "帳戶一覽：（示範模式，無資料）".to_string(),
        Intent::TotalAssets => "總資產：（示範模式，無資料）".to_string(),
        Intent::Website => "網站：https://fintalk.example".to_string(),
        Intent::Ledger => "記帳檢視：（示範模式，無資料）".to_string(),
        Intent::Unknown => "看不懂這句，輸入「說明」查看用法。".to_string(),
    }
}

/// Pull a share count out of the follow-up line of a two-step buy/sell.
/// The quantity rule only fires for 3-4 decimal inputs (the bare-amount
/// rule claims the rest), so the income shape counts as a quantity here.
pub fn extract_quantity(intent: &Intent) -> Option<f64> {
    match intent {
        Intent::QuantityInput { quantity } => Some(*quantity),
        Intent::Income { amount, note: None } => Some(*amount),
        _ => None,
    }
}

/// Run the REPL until EOF or an exit word.
pub fn run_repl<R: BufRead, W: Write>(
    classifier: &Classifier,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "fintalk — 輸入「說明」查看用法，exit 離開")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let intent = classifier.classify(trimmed);
        writeln!(out, "{}", reply_for(&intent))?;

        // Two-step flow: buy/sell waits for a share count on the next line.
        if let Intent::BuyAction { symbol } | Intent::SellAction { symbol } = &intent {
            let verb = if matches!(intent, Intent::BuyAction { .. }) {
                "買進"
            } else {
                "賣出"
            };
            let Some(next) = lines.next() else { break };
            let follow = classifier.classify(next?.trim());
            match extract_quantity(&follow) {
                Some(q) => {
                    let check = validate_quantity(q);
                    if check.is_valid() {
                        writeln!(out, "確認：{verb} {symbol} × {q} 股（示範模式，未送出）")?;
                    } else {
                        writeln!(out, "{}", check.error.unwrap_or_default())?;
                    }
                }
                None => writeln!(out, "已取消{verb}（未輸入有效股數）")?,
            }
        }
    }

    Ok(())
}
