//! Bundled button caption tables.
//!
//! Keys are the symbolic button names (`OK`, `ABORT`, ...). English is the
//! base table every other locale falls back to.

use crate::catalog::{LocaleStrings, StringCatalog};

type CaptionTable = [(&'static str, &'static str); 10];

const EN: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Abort"),
    ("CANCEL", "Cancel"),
    ("YES", "Yes"),
    ("NO", "No"),
    ("CLOSE", "Close"),
    ("SAVE", "Save"),
    ("RETRY", "Retry"),
    ("IGNORE", "Ignore"),
    ("HELP", "Help"),
];

const AR: CaptionTable = [
    ("OK", "موافق"),
    ("ABORT", "أجهض"),
    ("CANCEL", "ألغ"),
    ("YES", "نعم"),
    ("NO", "لا"),
    ("CLOSE", "أغلق"),
    ("SAVE", "احفظ"),
    ("RETRY", "أعِد المحاولة"),
    ("IGNORE", "تجاهل"),
    ("HELP", "مساعدة"),
];

const BS: CaptionTable = [
    ("OK", "U redu"),
    ("ABORT", "Obustavi"),
    ("CANCEL", "Odustani"),
    ("YES", "Da"),
    ("NO", "Ne"),
    ("CLOSE", "Zatvori"),
    ("SAVE", "Snimi"),
    ("RETRY", "Pokušaj ponovo"),
    ("IGNORE", "Ignoriši"),
    ("HELP", "Pomoć"),
];

const CS: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Přerušit"),
    ("CANCEL", "Zrušit"),
    ("YES", "Ano"),
    ("NO", "Ne"),
    ("CLOSE", "Zavřít"),
    ("SAVE", "Uložit"),
    ("RETRY", "Zkusit znovu"),
    ("IGNORE", "Ignorovat"),
    ("HELP", "Nápověda"),
];

const DA: CaptionTable = [
    ("OK", "O.k."),
    ("ABORT", "Afbryd"),
    ("CANCEL", "Annullér"),
    ("YES", "Ja"),
    ("NO", "Nej"),
    ("CLOSE", "Luk"),
    ("SAVE", "Gem"),
    ("RETRY", "Forsøg igen"),
    ("IGNORE", "Ignorér"),
    ("HELP", "Hjælp"),
];

const EO: CaptionTable = [
    ("OK", "Konfirmi"),
    ("ABORT", "Ĉesigi"),
    ("CANCEL", "Rezigni"),
    ("YES", "Jes"),
    ("NO", "Ne"),
    ("CLOSE", "Fermi"),
    ("SAVE", "Konsevi"),
    ("RETRY", "Provi denove"),
    ("IGNORE", "Malatenti"),
    ("HELP", "Helpo"),
];

const ES: CaptionTable = [
    ("OK", "Aceptar"),
    ("ABORT", "Interrumpir"),
    ("CANCEL", "Cancelar"),
    ("YES", "Sí"),
    ("NO", "No"),
    ("CLOSE", "Cerrar"),
    ("SAVE", "Guardar"),
    ("RETRY", "Reintentar"),
    ("IGNORE", "Ignorar"),
    ("HELP", "Ayuda"),
];

const ET: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Katkesta"),
    ("CANCEL", "Loobu"),
    ("YES", "Jah"),
    ("NO", "Ei"),
    ("CLOSE", "Sulge"),
    ("SAVE", "Salvesta"),
    ("RETRY", "Proovi uuesti"),
    ("IGNORE", "Eira"),
    ("HELP", "Abi"),
];

const EU: CaptionTable = [
    ("OK", "Ados"),
    ("ABORT", "Galarazi"),
    ("CANCEL", "Utzi"),
    ("YES", "Bai"),
    ("NO", "Ez"),
    ("CLOSE", "Itxi"),
    ("SAVE", "Gorde"),
    ("RETRY", "Saiatu berriz"),
    ("IGNORE", "Ez ikusi egin"),
    ("HELP", "Laguntza"),
];

const FI: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Keskeytä"),
    ("CANCEL", "Peru"),
    ("YES", "Kyllä"),
    ("NO", "Ei"),
    ("CLOSE", "Sulje"),
    ("SAVE", "Tallenna"),
    ("RETRY", "Yritä uudelleen"),
    ("IGNORE", "Ohita"),
    ("HELP", "Ohje"),
];

const FR: CaptionTable = [
    ("OK", "Ok"),
    ("ABORT", "Interrompre"),
    ("CANCEL", "Annuler"),
    ("YES", "Oui"),
    ("NO", "Non"),
    ("CLOSE", "Fermer"),
    ("SAVE", "Enregistrer"),
    ("RETRY", "Réessayer"),
    ("IGNORE", "Ignorer"),
    ("HELP", "Aide"),
];

const GL: CaptionTable = [
    ("OK", "Aceptar"),
    ("ABORT", "Interromper"),
    ("CANCEL", "Cancelar"),
    ("YES", "Si"),
    ("NO", "Non"),
    ("CLOSE", "Pechar"),
    ("SAVE", "Gardar"),
    ("RETRY", "Tentar de novo"),
    ("IGNORE", "Ignorar"),
    ("HELP", "Axuda"),
];

const IT: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Interrompi"),
    ("CANCEL", "Annulla"),
    ("YES", "Sì"),
    ("NO", "No"),
    ("CLOSE", "Chiudi"),
    ("SAVE", "Salva"),
    ("RETRY", "Riprova"),
    ("IGNORE", "Ignora"),
    ("HELP", "Aiuto"),
];

const KK: CaptionTable = [
    ("OK", "ОК"),
    ("ABORT", "Доғару"),
    ("CANCEL", "Қайту"),
    ("YES", "Иә"),
    ("NO", "Жоқ"),
    ("CLOSE", "Жабу"),
    ("SAVE", "Сақтау"),
    ("RETRY", "Қайталау"),
    ("IGNORE", "Елемеу"),
    ("HELP", "Анықтама"),
];

const LV: CaptionTable = [
    ("OK", "Labi"),
    ("ABORT", "Pārtraukt"),
    ("CANCEL", "Atcelt"),
    ("YES", "Jā"),
    ("NO", "Nē"),
    ("CLOSE", "Aizvērt"),
    ("SAVE", "Saglabāt"),
    ("RETRY", "Mēģināt vēlreiz"),
    ("IGNORE", "Ignorēt"),
    ("HELP", "Palīdzība"),
];

const PT_BR: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Cancelar"),
    ("CANCEL", "Cancelar"),
    ("YES", "Sim"),
    ("NO", "Não"),
    ("CLOSE", "Fechar"),
    ("SAVE", "Salvar"),
    ("RETRY", "Tentar novamente"),
    ("IGNORE", "Ignorar"),
    ("HELP", "Ajuda"),
];

const RO: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Anulare"),
    ("CANCEL", "Renunță"),
    ("YES", "Da"),
    ("NO", "Nu"),
    ("CLOSE", "Închide"),
    ("SAVE", "Salvează"),
    ("RETRY", "Reîncercare"),
    ("IGNORE", "Ignoră"),
    ("HELP", "Ajutor"),
];

const SK: CaptionTable = [
    ("OK", "OK"),
    ("ABORT", "Prerušiť"),
    ("CANCEL", "Zrušiť"),
    ("YES", "Áno"),
    ("NO", "Nie"),
    ("CLOSE", "Zavrieť"),
    ("SAVE", "Uložiť"),
    ("RETRY", "Skúsiť znova"),
    ("IGNORE", "Ignorovať"),
    ("HELP", "Pomocník"),
];

const SL: CaptionTable = [
    ("OK", "V redu"),
    ("ABORT", "Prekini"),
    ("CANCEL", "Prekliči"),
    ("YES", "Da"),
    ("NO", "Ne"),
    ("CLOSE", "Zapri"),
    ("SAVE", "Shrani"),
    ("RETRY", "Poskusi znova"),
    ("IGNORE", "Prezri"),
    ("HELP", "Pomoč"),
];

const SR: CaptionTable = [
    ("OK", "У реду"),
    ("ABORT", "Обустави"),
    ("CANCEL", "Одустани"),
    ("YES", "Да"),
    ("NO", "Не"),
    ("CLOSE", "Затвори"),
    ("SAVE", "сачувај"),
    ("RETRY", "Покушај поново"),
    ("IGNORE", "Игнориши"),
    ("HELP", "Помоћ"),
];

const SV: CaptionTable = [
    ("OK", "Ok"),
    ("ABORT", "Avbryt"),
    ("CANCEL", "Avbryt"),
    ("YES", "Ja"),
    ("NO", "Nej"),
    ("CLOSE", "Stäng"),
    ("SAVE", "Spara"),
    ("RETRY", "Försök igen"),
    ("IGNORE", "Ignorera"),
    ("HELP", "Hjälp"),
];

const TR: CaptionTable = [
    ("OK", "Tamam"),
    ("ABORT", "İptal"),
    ("CANCEL", "İptal"),
    ("YES", "Evet"),
    ("NO", "Hayır"),
    ("CLOSE", "Kapat"),
    ("SAVE", "Kaydet"),
    ("RETRY", "Yeniden Dene"),
    ("IGNORE", "Yoksay"),
    ("HELP", "Yardım"),
];

const WA: CaptionTable = [
    ("OK", "l' est Bon"),
    ("ABORT", "Abandner"),
    ("CANCEL", "Rinoncî"),
    ("YES", "Oyi"),
    ("NO", "Neni"),
    ("CLOSE", "Clôre"),
    ("SAVE", "Schaper"),
    ("RETRY", "Rissayî"),
    ("IGNORE", "Passer houte"),
    ("HELP", "Aidance"),
];

const TABLES: [(&str, &CaptionTable); 23] = [
    ("en", &EN),
    ("ar", &AR),
    ("bs", &BS),
    ("cs", &CS),
    ("da", &DA),
    ("eo", &EO),
    ("es", &ES),
    ("et", &ET),
    ("eu", &EU),
    ("fi", &FI),
    ("fr", &FR),
    ("gl", &GL),
    ("it", &IT),
    ("kk", &KK),
    ("lv", &LV),
    ("pt-BR", &PT_BR),
    ("ro", &RO),
    ("sk", &SK),
    ("sl", &SL),
    ("sr", &SR),
    ("sv", &SV),
    ("tr", &TR),
    ("wa", &WA),
];

/// Locale tags with a bundled caption table.
pub const BUNDLED_LOCALES: [&str; 23] = [
    "en", "ar", "bs", "cs", "da", "eo", "es", "et", "eu", "fi", "fr", "gl", "it", "kk", "lv",
    "pt-BR", "ro", "sk", "sl", "sr", "sv", "tr", "wa",
];

/// Build a catalog holding every bundled caption table.
#[must_use]
pub fn bundled_button_captions() -> StringCatalog {
    let mut catalog = StringCatalog::new();
    for (locale, table) in TABLES {
        catalog.add_locale(locale, table.iter().copied().collect::<LocaleStrings>());
    }
    catalog
}
