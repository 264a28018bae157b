//! Fixed reply texts
//!
//! Everything here is bilingual (Hindi / English) so the same text serves
//! both audiences without a translation round-trip.

use chrono::{DateTime, Utc};
use health_agent_core::{DiseaseId, DiseaseStats};

/// Help text returned when nothing more specific applies
pub const DEFAULT_HELP: &str = "🏥 AI स्वास्थ्य सहायक - AI Health Assistant

मैं आपकी निम्न समस्याओं में मदद कर सकता हूं / I can help you with:

🦟 रोगों के लक्षण / Disease Symptoms:
• मलेरिया / Malaria
• डेंगू / Dengue
• कोविड-19 / COVID-19
• टाइफाइड / Typhoid

💉 टीकाकरण / Vaccination:
• टीकाकरण केंद्र / Vaccination centers
• टीकाकरण कार्यक्रम / Vaccination schedule

🛡️ बचाव के तरीके / Prevention:
• घरेलू उपाय / Home remedies
• स्वच्छता / Hygiene practices

📞 आपातकालीन संपर्क / Emergency Contacts:
• 102 - मेडिकल इमरजेंसी
• 1075 - स्वास्थ्य हेल्पलाइन

उदाहरण / Examples:
\"मलेरिया के लक्षण\" या \"dengue symptoms\"
\"कोविड से बचाव\" या \"covid prevention\"

❓ मुझसे कुछ भी पूछें! Ask me anything!";

/// Reply for malformed requests and unexpected failures
pub const APOLOGY: &str =
    "क्षमा करें, तकनीकी समस्या है। कृपया दोबारा कोशिश करें। / Sorry, technical issue. Please try again.";

pub const EMERGENCY: &str = "🚨 आपातकालीन स्वास्थ्य संपर्क / EMERGENCY HEALTH CONTACTS:

🆘 तुरंत कॉल करें / CALL IMMEDIATELY:
• मेडिकल इमरजेंसी / Medical Emergency: 102
• एम्बुलेंस / Ambulance: 108
• पुलिस / Police: 100 (यदि जरूरत हो / if needed)
• फायर ब्रिगेड / Fire: 101

🏥 स्वास्थ्य हेल्पलाइन / Health Helplines:
• राष्ट्रीय स्वास्थ्य हेल्पलाइन / National: 1075
• कोविड-19 हेल्पलाइन: +91-11-23978046
• आयुष मंत्रालय: 14443
• महिला हेल्पलाइन / Women: 1091
• बाल हेल्पलाइन / Child: 1098

☠️ जहर नियंत्रण / Poison Control:
• एम्स दिल्ली / AIIMS Delhi: 011-26588663
• दिल्ली पॉइजन इन्फो: 011-26589391

📍 राज्य-वार हेल्पलाइन / State-wise Helplines:
• महाराष्ट्र: 020-26127394
• दिल्ली: 011-22307145
• कर्नाटक: 080-46848600
• तमिलनाडु: 044-29510500
• उत्तर प्रदेश: 0522-2239223
• बिहार: 0612-2215755

🚑 तुरंत करें / IMMEDIATE ACTION:
• शांत रहें / Stay calm
• 102 डायल करें / Dial 102
• मरीज़ का पूरा पता बताएं / Give complete address
• लक्षण स्पष्ट रूप से बताएं / Clearly describe symptoms
• एम्बुलेंस का इंतजार करें / Wait for ambulance

⚠️ सभी नंबर अपने फोन में सेव कर लें! / Save all numbers in your phone!

🏥 यदि कोई इमरजेंसी है तो तुरंत 102 पर कॉल करें!";

/// Returned when the statistics service cannot be reached
pub const HEALTH_DATA_FALLBACK: &str = "📊 स्वास्थ्य डेटा सेवा अस्थायी रूप से उपलब्ध नहीं है।
कृपया स्थानीय स्वास्थ्य विभाग की वेबसाइट देखें या 1075 पर संपर्क करें।

📱 वैकल्पिक स्रोत:
• आरोग्य सेतु ऐप
• MyGov.in
• स्वास्थ्य मंत्रालय वेबसाइट

📞 हेल्पलाइन: 1075";

const VACCINATION_HEADER: &str = "💉 VACCINATION INFORMATION (टीकाकरण जानकारी):

🏥 कहां मिले टीका / Where to Get Vaccinated:
• प्राथमिक स्वास्थ्य केंद्र (PHC) / Primary Health Centers
• सामुदायिक स्वास्थ्य केंद्र (CHC) / Community Health Centers
• सरकारी अस्पताल / Government Hospitals
• अधिकृत निजी अस्पताल / Authorized Private Hospitals
• आंगनवाड़ी केंद्र / Anganwadi Centers

💉 उपलब्ध टीके / Available Vaccines:
• कोविड-19: सभी सरकारी केंद्रों पर मुफ्त / Free at all govt centers
• हेपेटाइटिस बी: PHC में उपलब्ध / Available at PHC
• टाइफाइड: उच्च जोखिम वाले क्षेत्रों में / High-risk areas
• जापानी इंसेफेलाइटिस: स्थानीय क्षेत्र अनुसार / Area-specific

📱 बुकिंग कैसे करें / How to Book:
• नजदीकी स्वास्थ्य केंद्र जाएं / Visit nearest health center
• आशा कार्यकर्ता से संपर्क करें / Contact ASHA worker
• CoWIN पोर्टल (कोविड के लिए) / CoWIN portal for COVID
• PHC में फोन करें / Call PHC directly

📞 हेल्पलाइन / Helplines:
• राष्ट्रीय: 1075 / National: 1075
• कोविड हेल्पलाइन: +91-11-23978046
• आपातकाल: 102 / Emergency: 102";

const VACCINATION_FOOTER: &str =
    "💡 अपने क्षेत्र के टीकाकरण केंद्र जानने के लिए अपना जिला/शहर का नाम भेजें!";

const GENERIC_CENTRES: &[&str] = &["स्थानीय PHC", "सामुदायिक स्वास्थ्य केंद्र", "जिला अस्पताल"];

/// Known vaccination centres for major cities
pub fn vaccination_centres(location: &str) -> &'static [&'static str] {
    match location.trim().to_lowercase().as_str() {
        "delhi" | "new delhi" => &["AIIMS Delhi", "Safdarjung Hospital", "RML Hospital"],
        "mumbai" => &["KEM Hospital", "Sion Hospital", "Nair Hospital"],
        "bangalore" | "bengaluru" => &["Victoria Hospital", "Bowring Hospital", "NIMHANS"],
        "chennai" => &["Stanley Medical College", "Kilpauk Medical College"],
        "kolkata" => &["Medical College Hospital", "SSKM Hospital"],
        _ => GENERIC_CENTRES,
    }
}

pub fn vaccination(location: &str) -> String {
    let centres = vaccination_centres(location)
        .iter()
        .map(|c| format!("• {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n📍 {} में टीकाकरण केंद्र:\n{}\n\n💡 अधिक केंद्रों की जानकारी के लिए 1075 पर कॉल करें।\n\n{}",
        VACCINATION_HEADER,
        location.trim().to_uppercase(),
        centres,
        VACCINATION_FOOTER
    )
}

/// Asks which disease the user means, listing those with prevention advice
pub fn prevention_fallback(available: &[DiseaseId]) -> String {
    let names = available
        .iter()
        .map(|d| d.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I can provide prevention tips for: {}. Which disease prevention would you like to know about?",
        names
    )
}

pub fn health_data(region: &str, stats: &DiseaseStats, updated_at: DateTime<Utc>) -> String {
    format!(
        "📊 स्वास्थ्य डेटा / HEALTH DATA FOR {region}:

🦠 कोविड-19 स्थिति / COVID-19 STATUS:
• कुल मामले / Total Cases: {cases}
• सक्रिय मामले / Active Cases: {active}
• ठीक हुए / Recovered: {recovered}
• आज के मामले / Today's Cases: {today_cases}
• मृत्यु दर / Death Rate: {death_rate:.2}%

💉 टीकाकरण / Vaccination:
• परीक्षण / Tests Conducted: {tests}
• प्रति मिलियन मामले / Cases Per Million: {cases_pm}
• प्रति मिलियन परीक्षण / Tests Per Million: {tests_pm}

🏥 स्वास्थ्य सुविधा / Healthcare Capacity:
• गंभीर मामले / Critical Cases: {critical}
• जनसंख्या / Population: {population}
• आज की मृत्यु / Today's Deaths: {today_deaths}

📈 प्रवृत्ति विश्लेषण / Trend Analysis:
• रिकवरी दर / Recovery Rate: {recovery_rate:.2}%
• सक्रियता दर / Activity Rate: {active_rate:.2}%

⚠️ स्वास्थ्य दिशा-निर्देशों का पालन करें! / Follow health guidelines!
📱 आरोग्य सेतु ऐप डाउनलोड करें / Download Aarogya Setu app

🔄 अपडेट: {updated}
📞 हेल्पलाइन: 1075 | आपातकाल: 102",
        region = region.trim().to_uppercase(),
        cases = group_thousands(stats.cases),
        active = group_thousands(stats.active),
        recovered = group_thousands(stats.recovered),
        today_cases = group_thousands(stats.today_cases),
        death_rate = stats.death_rate(),
        tests = group_thousands(stats.tests),
        cases_pm = group_decimal(stats.cases_per_one_million),
        tests_pm = group_decimal(stats.tests_per_one_million),
        critical = group_thousands(stats.critical),
        population = group_thousands(stats.population),
        today_deaths = group_thousands(stats.today_deaths),
        recovery_rate = stats.recovery_rate(),
        active_rate = stats.active_rate(),
        updated = updated_at.format("%d/%m/%Y %H:%M UTC"),
    )
}

/// Bilingual outbreak alert for a daily case count
pub fn outbreak_alert(today_cases: u64) -> String {
    let n = group_thousands(today_cases);
    format!(
        "🚨 स्वास्थ्य चेतावनी / HEALTH ALERT 🚨

आज कोविड मामले: {n}
Today's COVID cases: {n}

सुरक्षा उपाय अपनाएं:
• मास्क पहनें / Wear masks
• सामाजिक दूरी / Social distancing
• हाथ धोएं / Wash hands
• टीकाकरण कराएं / Get vaccinated

सुरक्षित रहें! 🙏 Stay safe!
हेल्पलाइन: 1075"
    )
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thousands separators on the integer part, trailing zeros trimmed
fn group_decimal(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return format!("{}", value);
    }

    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = int_part
        .parse::<u64>()
        .map(group_thousands)
        .unwrap_or_else(|_| int_part.to_string());
    let frac = frac_part.trim_end_matches('0');

    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}
